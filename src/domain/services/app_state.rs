#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::path::PathBuf;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tui_textarea::Input;
use tui_textarea::Key;

use super::actions::help_text;
use super::BubbleList;
use super::ReplyScheduler;
use super::Scroll;
use super::Simulator;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AccountSummary;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Faq;
use crate::domain::models::Language;
use crate::domain::models::MessageType;
use crate::domain::models::OverlapPolicy;
use crate::domain::models::Phrase;
use crate::domain::models::QuickActionOutcome;
use crate::domain::models::ReplyPolicyBox;
use crate::domain::models::ReplyPolicyName;
use crate::domain::models::ReplyResponse;
use crate::domain::models::SlashCommand;
use crate::domain::models::Toast;
use crate::domain::models::Variant;
use crate::domain::models::EMOJIS;
use crate::infrastructure::policies::ReplyPolicyManager;

/// What the UI loop should do after a line of input was checked for slash
/// commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Quit,
    Handled,
    /// Replace the input with this text.
    Draft(String),
    NotCommand,
}

pub struct AppStateProps {
    pub account: AccountSummary,
    pub language: Language,
    pub overlap: OverlapPolicy,
    pub policy: ReplyPolicyBox,
    pub variant: Variant,
}

impl AppStateProps {
    pub fn from_config() -> Result<AppStateProps> {
        let policy_name = ReplyPolicyName::parse(Config::get(ConfigKey::ReplyPolicy))
            .unwrap_or(ReplyPolicyName::Keyword);

        return Ok(AppStateProps {
            account: AccountSummary::from_config(),
            language: Language::parse(&Config::get(ConfigKey::Language)).unwrap_or_default(),
            overlap: OverlapPolicy::parse(Config::get(ConfigKey::Overlap))
                .unwrap_or(OverlapPolicy::Supersede),
            policy: ReplyPolicyManager::get(policy_name)?,
            variant: Variant::parse(&Config::get(ConfigKey::Variant)).unwrap_or_default(),
        });
    }
}

pub struct AppState {
    pub account: AccountSummary,
    pub auth_challenge_visible: bool,
    pub bubble_list: BubbleList,
    pub emoji_picker_visible: bool,
    pub language: Language,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub quick_actions_visible: bool,
    pub recording: bool,
    pub scroll: Scroll,
    pub simulator: Simulator,
    pub toast: Option<Toast>,
    pub variant: Variant,
}

impl AppState {
    pub async fn new(props: AppStateProps, tx: mpsc::UnboundedSender<Event>) -> AppState {
        let health = props.policy.health_check().await;
        let policy_name = props.policy.name();

        let mut app_state = AppState {
            account: props.account,
            auth_challenge_visible: false,
            bubble_list: BubbleList::new(props.variant.palette()),
            emoji_picker_visible: false,
            language: props.language,
            last_known_height: 0,
            last_known_width: 0,
            quick_actions_visible: true,
            recording: false,
            scroll: Scroll::default(),
            simulator: Simulator::new(ReplyScheduler::new(props.policy, props.overlap, tx)),
            toast: None,
            variant: props.variant,
        };

        if let Err(err) = health {
            tracing::error!(error = ?err, policy = policy_name.to_string(), "health check failed");
            app_state.simulator.notice(
                MessageType::Error,
                &format!("The {policy_name} reply policy isn't responding, so replies may fail until it's back.\n\nError: {err}"),
            );
        }

        return app_state;
    }

    pub fn handle_slash_commands(
        &mut self,
        input_str: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<CommandOutcome> {
        let command = match SlashCommand::parse(input_str) {
            Some(command) => command,
            None => return Ok(CommandOutcome::NotCommand),
        };

        if command.is_quit() {
            return Ok(CommandOutcome::Quit);
        }

        if command.is_help() {
            self.add_notice(MessageType::Normal, &help_text());
            return Ok(CommandOutcome::Handled);
        }

        if let Some(quick_action) = command.quick_action() {
            match quick_action.resolve(self.variant, self.language) {
                QuickActionOutcome::Submit(utterance) => {
                    self.submit(&utterance);
                }
                QuickActionOutcome::OpenAuthChallenge => {
                    self.auth_challenge_visible = true;
                }
                QuickActionOutcome::Unavailable => {
                    self.add_notice(
                        MessageType::Error,
                        &format!(
                            "{} isn't available in the {} chat.",
                            quick_action.command(),
                            self.variant
                        ),
                    );
                }
            }

            return Ok(CommandOutcome::Handled);
        }

        if command.is_faq() {
            let faqs = Faq::list(self.variant, self.language);
            match command
                .position_arg()
                .and_then(|position| return Faq::get(self.variant, self.language, position))
            {
                Some(faq) => {
                    tracing::debug!(id = faq.id, category = faq.category.as_str(), "faq asked");
                    self.submit(&faq.question);
                }
                None => {
                    self.add_notice(
                        MessageType::Error,
                        &format!("Pick a question between 1 and {} with /faq NUMBER.", faqs.len()),
                    );
                }
            }

            return Ok(CommandOutcome::Handled);
        }

        if command.is_language() {
            self.toggle_language();
            return Ok(CommandOutcome::Handled);
        }

        if command.is_agent() {
            self.toast = Some(Toast::with_description(
                Phrase::Connecting.text(self.language),
                Phrase::LiveAgentDetail.text(self.language),
            ));
            return Ok(CommandOutcome::Handled);
        }

        if command.is_attach() {
            let path = command.rest();
            if path.is_empty() {
                self.add_notice(MessageType::Error, "Pass a file path with /attach PATH.");
            } else {
                tx.send(Action::AttachFile(PathBuf::from(path)))?;
            }

            return Ok(CommandOutcome::Handled);
        }

        if command.is_record() {
            self.recording = !self.recording;
            if self.recording {
                self.toast = Some(Toast::with_description(
                    Phrase::RecordingStarted.text(self.language),
                    Phrase::RecordingHint.text(self.language),
                ));
            }

            return Ok(CommandOutcome::Handled);
        }

        if command.is_emoji() {
            if command.args.is_empty() {
                self.emoji_picker_visible = !self.emoji_picker_visible;
                return Ok(CommandOutcome::Handled);
            }

            let emoji = command
                .position_arg()
                .and_then(|position| return EMOJIS.get(position.wrapping_sub(1)));
            if let Some(emoji) = emoji {
                self.emoji_picker_visible = false;
                return Ok(CommandOutcome::Draft(emoji.to_string()));
            }

            self.add_notice(
                MessageType::Error,
                &format!("Pick an emoji between 1 and {} with /emoji NUMBER.", EMOJIS.len()),
            );
            return Ok(CommandOutcome::Handled);
        }

        if command.is_rate() {
            let rating = command.args.first().map(|arg| return arg.as_str());
            if rating == Some("up") || rating == Some("down") {
                self.toast = Some(Toast::with_description(
                    Phrase::FeedbackThanks.text(self.language),
                    Phrase::FeedbackDetail.text(self.language),
                ));
            } else {
                self.add_notice(MessageType::Error, "Rate with /rate up or /rate down.");
            }

            return Ok(CommandOutcome::Handled);
        }

        if command.is_copy() {
            tx.send(Action::CopyTranscript(self.transcript()))?;
            return Ok(CommandOutcome::Handled);
        }

        if command.is_offline() || command.is_online() {
            self.set_connectivity(command.is_online());
            return Ok(CommandOutcome::Handled);
        }

        if command.is_toggle_actions() {
            if self.variant.collapsible_quick_actions() {
                self.quick_actions_visible = !self.quick_actions_visible;
            } else {
                self.add_notice(
                    MessageType::Error,
                    &format!("/actions isn't available in the {} chat.", self.variant),
                );
            }

            return Ok(CommandOutcome::Handled);
        }

        return Ok(CommandOutcome::NotCommand);
    }

    /// Sends free text to the assistant. Returns false when nothing was sent,
    /// so the caller can keep the draft.
    pub fn submit(&mut self, text: &str) -> bool {
        if self.simulator.submit(text, self.language).is_none() {
            return false;
        }

        self.sync_dependants();
        self.scroll.last();
        return true;
    }

    pub fn handle_reply(&mut self, res: ReplyResponse) {
        if !self.simulator.handle_reply(res) {
            return;
        }

        if self.variant.announces_replies() {
            self.toast = Some(Toast::new(Phrase::NewMessage.text(self.language)));
        }

        self.sync_dependants();
        self.scroll.last();
    }

    pub fn handle_reply_failure(&mut self, request_id: u64, error: &str) {
        if self.simulator.handle_reply_failure(request_id, error) {
            self.sync_dependants();
            self.scroll.last();
        }
    }

    pub fn add_notice(&mut self, mtype: MessageType, text: &str) {
        self.simulator.notice(mtype, text);
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_connectivity(&mut self, online: bool) {
        self.simulator.set_connectivity(online);
    }

    /// Returns true when there was a reply to cancel.
    pub fn cancel_pending(&mut self) -> bool {
        if !self.simulator.is_composing() {
            return false;
        }

        self.simulator.cancel_pending();
        return true;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.toast = Some(Toast::new(Phrase::LanguageSwitched.text(self.language)));
        self.sync_dependants();
    }

    /// Confirms the identity dialog. Does nothing when the dialog is closed.
    pub fn verify_identity(&mut self) -> bool {
        if !self.auth_challenge_visible {
            return false;
        }

        self.auth_challenge_visible = false;
        self.toast = Some(Toast::with_description(
            Phrase::VerifySuccess.text(self.language),
            Phrase::VerifyProceed.text(self.language),
        ));
        return true;
    }

    /// Alt+N while the emoji strip is open picks emoji N, so it can be
    /// inserted anywhere in the draft.
    pub fn emoji_for_input(&self, input: &Input) -> Option<&'static str> {
        if !self.emoji_picker_visible || !input.alt || input.ctrl {
            return None;
        }

        if let Key::Char(char) = input.key {
            let position = char.to_digit(10)? as usize;
            return EMOJIS.get(position.wrapping_sub(1)).copied();
        }

        return None;
    }

    pub fn dismiss_overlays(&mut self) {
        self.auth_challenge_visible = false;
        self.emoji_picker_visible = false;
    }

    pub fn file_selected(&mut self, name: &str) {
        self.toast = Some(Toast::with_description(
            Phrase::FileUploaded.text(self.language),
            name,
        ));
    }

    pub fn transcript_copied(&mut self) {
        self.toast = Some(Toast::new(Phrase::CopiedTranscript.text(self.language)));
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.toast {
            if toast.is_expired(now) {
                self.toast = None;
            }
        }
    }

    pub fn transcript(&self) -> String {
        return self
            .simulator
            .messages()
            .iter()
            .map(|message| {
                return format!(
                    "{} ({}): {}",
                    message.author.label(self.language),
                    message.time_label(),
                    message.text
                );
            })
            .collect::<Vec<String>>()
            .join("\n\n");
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        let follow = self.scroll.is_at_bottom();

        self.bubble_list.set_messages(
            self.simulator.messages(),
            self.last_known_width.into(),
            self.language,
        );

        self.scroll.set_state(
            u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX),
            self.last_known_height,
        );

        if follow {
            self.scroll.last();
        }
    }
}
