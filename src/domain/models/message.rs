#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;
use ratatui::text::Span;

use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    Error,
}

/// Terminal column width of `text`, so Arabic and currency glyphs line up in
/// bubbles.
pub fn text_width(text: &str) -> usize {
    return Span::raw(text).width();
}

/// A single entry in the conversation log. Messages are created by
/// `Conversation` and never change afterwards.
#[derive(Clone, Debug)]
pub struct Message {
    pub id: u64,
    pub author: Author,
    pub text: String,
    pub created_at: DateTime<Local>,
    mtype: MessageType,
}

impl Message {
    #[cfg(test)]
    pub fn new(id: u64, author: Author, text: &str) -> Message {
        return Message::new_with_type(id, author, MessageType::Normal, text);
    }

    pub fn new_with_type(id: u64, author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            id,
            author,
            text: text.to_string().replace('\t', "  "),
            created_at: Local::now(),
            mtype,
        };
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn time_label(&self) -> String {
        return self.created_at.format("%H:%M").to_string();
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut current = String::new();
            for word in full_line.split(' ') {
                let joined = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };

                if text_width(&joined) <= line_max_width {
                    current = joined;
                    continue;
                }

                if !current.is_empty() {
                    lines.push(current.trim_end().to_string());
                }

                // Words wider than the bubble are split on characters.
                current = String::new();
                for ch in word.chars() {
                    let next = format!("{current}{ch}");
                    if text_width(&next) > line_max_width && !current.is_empty() {
                        lines.push(current);
                        current = ch.to_string();
                    } else {
                        current = next;
                    }
                }
            }

            if !current.trim().is_empty() {
                lines.push(current.trim_end().to_string());
            }
        }

        return lines;
    }
}
