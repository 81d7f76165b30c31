#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use std::collections::BTreeMap;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use crate::domain::models::Language;
use crate::domain::models::Message;
use crate::domain::models::Palette;

/// Rendered bubbles keyed by message id. Messages never change once logged,
/// so an entry only goes stale when the width or language does.
pub struct BubbleList {
    cache: BTreeMap<u64, Vec<Line<'static>>>,
    line_width: usize,
    language: Language,
    palette: Palette,
    lines_len: usize,
}

impl BubbleList {
    pub fn new(palette: Palette) -> BubbleList {
        return BubbleList {
            cache: BTreeMap::new(),
            line_width: 0,
            language: Language::default(),
            palette,
            lines_len: 0,
        };
    }

    pub fn set_messages(&mut self, messages: &[Message], line_width: usize, language: Language) {
        if self.line_width != line_width || self.language != language {
            self.cache.clear();
            self.line_width = line_width;
            self.language = language;
        }

        for message in messages {
            if self.cache.contains_key(&message.id) {
                continue;
            }

            let lines = Bubble::new(message, language, self.palette, line_width).as_lines();
            self.cache.insert(message.id, lines);
        }

        self.lines_len = self.cache.values().map(|lines| return lines.len()).sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        let lines: Vec<Line> = self
            .cache
            .values()
            .flat_map(|lines| return lines.to_owned())
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
