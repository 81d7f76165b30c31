#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::path::Path;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::MessageType;

const ATTACHMENT_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /balance (/b) - Ask for your account balance.
- /transactions (/t) - Ask for your recent transactions.
- /transfer - Start a transfer. Requires identity verification.
- /support - Ask for help. Facelift variant only.
- /faq [NUMBER] - Ask one of the frequently asked questions.
- /lang (/l) - Switch between English and Arabic.
- /agent - Request a live agent.
- /attach [PATH] - Attach a PDF, JPG or PNG file. Nothing is uploaded.
- /record (/mic) - Toggle voice recording.
- /emoji [NUMBER?] - Toggle the emoji picker, or add emoji NUMBER to your message.
- /rate [up,down] - Rate the conversation.
- /copy (/c) - Copies the entire chat history to your clipboard.
- /offline, /online - Simulate losing and regaining the network.
- /actions - Collapse or expand quick actions. Facelift variant only.
- /quit /exit (/q) - Exit bankchat.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+L - Switch language.
- CTRL+C - Cancel waiting for a reply if in progress, otherwise exit.
- Enter - Send your message, or verify when the identity dialog is open.
- ALT+1..8 - Insert an emoji at the cursor while the emoji picker is open.
- Esc - Close the identity dialog or emoji picker.
        "#;

    return text.trim().to_string();
}

/// Validates a file picked with `/attach`. Nothing is read or uploaded, the
/// file name is only echoed back to the user.
pub fn attach_file(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .map(|ext| return ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if !ATTACHMENT_EXTENSIONS.contains(&extension.as_str()) {
        bail!(
            "Only {} files can be attached.",
            ATTACHMENT_EXTENSIONS.join(", ")
        );
    }

    if !path.is_file() {
        bail!("No file found at {}", path.to_string_lossy());
    }

    let name = path
        .file_name()
        .map(|name| return name.to_string_lossy().to_string())
        .unwrap_or_default();

    return Ok(name);
}

fn worker_error(err: anyhow::Error, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tx.send(Event::Notice(MessageType::Error, err.to_string()))?;
    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::AttachFile(path) => match attach_file(&path) {
                    Ok(name) => {
                        tracing::info!(name, "file selected");
                        tx.send(Event::FileSelected(name))?;
                    }
                    Err(err) => {
                        worker_error(err, &tx)?;
                    }
                },
                Action::CopyTranscript(transcript) => match ClipboardService::set(transcript) {
                    Ok(()) => {
                        tx.send(Event::TranscriptCopied())?;
                    }
                    Err(err) => {
                        tracing::warn!(error = ?err, "clipboard copy failed");
                        worker_error(err, &tx)?;
                    }
                },
            }
        }

        return Ok(());
    }
}
