use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

use super::Language;
use super::Phrase;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(TextArea::block(Language::default(), true));

        return textarea;
    }

    /// The input's frame doubles as its placeholder, so it's rebuilt whenever
    /// the language or connectivity changes.
    pub fn block(language: Language, online: bool) -> Block<'a> {
        let mut title = Phrase::InputPlaceholder.text(language);
        if !online {
            title = Phrase::OfflinePlaceholder.text(language);
        }

        return Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(format!("{title} (Enter: {})", Phrase::Send.text(language)))
            .padding(Padding::new(1, 1, 0, 0));
    }
}
