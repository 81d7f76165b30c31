#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use super::Author;
use super::Message;
use super::MessageType;

pub const GREETING: &str = "أهلاً وسهلاً بك في مساعد البنك الذكي! كيف يمكنني مساعدتك اليوم؟\n\nWelcome to Al Bilad Smart Assistant! How can I help you today?";

/// Append-only, ordered conversation log. Ids are handed out in creation
/// order starting at 1, and nothing is ever removed or rewritten.
pub struct Conversation {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for Conversation {
    fn default() -> Conversation {
        let mut conversation = Conversation {
            messages: vec![],
            next_id: 1,
        };
        conversation.push(Author::Assistant, MessageType::Normal, GREETING);

        return conversation;
    }
}

impl Conversation {
    pub fn push(&mut self, author: Author, mtype: MessageType, text: &str) -> &Message {
        let message = Message::new_with_type(self.next_id, author, mtype, text);
        self.next_id += 1;
        self.messages.push(message);

        return &self.messages[self.messages.len() - 1];
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Message> {
        return self.messages.last();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        return self.messages.len();
    }
}
