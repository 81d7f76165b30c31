#[cfg(test)]
#[path = "simulator_test.rs"]
mod tests;

use super::ReplyScheduler;
use crate::domain::models::Author;
use crate::domain::models::Conversation;
use crate::domain::models::Language;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::ReplyPrompt;
use crate::domain::models::ReplyResponse;

/// Owns the conversation log and the turn taking between user messages and
/// assistant replies. The UI loop is the only caller, so there's no locking.
pub struct Simulator {
    conversation: Conversation,
    online: bool,
    replies: ReplyScheduler,
}

impl Simulator {
    pub fn new(replies: ReplyScheduler) -> Simulator {
        return Simulator {
            conversation: Conversation::default(),
            online: true,
            replies,
        };
    }

    pub fn messages(&self) -> &[Message] {
        return self.conversation.messages();
    }

    pub fn is_online(&self) -> bool {
        return self.online;
    }

    pub fn is_composing(&self) -> bool {
        return self.replies.is_composing();
    }

    /// Appends the user's message and requests a reply for it. Blank input
    /// and submissions while offline are ignored, returning `None`.
    pub fn submit(&mut self, text: &str, language: Language) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }
        if !self.online {
            tracing::debug!("submit ignored while offline");
            return None;
        }

        let request_id = self
            .conversation
            .push(Author::User, MessageType::Normal, text)
            .id;
        self.replies
            .schedule(ReplyPrompt::new(request_id, text, language));

        return Some(request_id);
    }

    /// Going offline only blocks new submissions. Pending replies still land.
    pub fn set_connectivity(&mut self, online: bool) {
        if self.online != online {
            tracing::info!(online, "connectivity changed");
        }
        self.online = online;
    }

    pub fn handle_reply(&mut self, response: ReplyResponse) -> bool {
        if !self.replies.complete(response.request_id) {
            tracing::debug!(
                request_id = response.request_id,
                "dropping reply for cancelled request"
            );
            return false;
        }

        self.conversation
            .push(response.author, MessageType::Normal, &response.text);
        return true;
    }

    pub fn handle_reply_failure(&mut self, request_id: u64, error: &str) -> bool {
        if !self.replies.complete(request_id) {
            return false;
        }

        self.notice(
            MessageType::Error,
            &format!("The assistant failed to reply with the following error: {error}"),
        );
        return true;
    }

    pub fn notice(&mut self, mtype: MessageType, text: &str) -> u64 {
        return self.conversation.push(Author::Notice, mtype, text).id;
    }

    pub fn cancel_pending(&mut self) {
        self.replies.cancel_all();
    }
}
