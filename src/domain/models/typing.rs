use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Language;
use super::Palette;
use super::Phrase;

/// Indicator shown while at least one reply is pending.
#[derive(Default)]
pub struct TypingIndicator {}

impl TypingIndicator {
    pub fn render<B: Backend>(
        &self,
        frame: &mut Frame<B>,
        rect: Rect,
        language: Language,
        palette: Palette,
    ) {
        frame.render_widget(
            Paragraph::new(format!("🤖 {} ● ● ●", Phrase::Thinking.text(language)))
                .style(Style::default().fg(palette.muted)),
            rect,
        );
    }
}
