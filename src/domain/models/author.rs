use super::Language;
use super::Phrase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
    Notice,
}

impl Author {
    pub fn label(&self, language: Language) -> &'static str {
        match self {
            Author::User => return Phrase::AuthorUser.text(language),
            Author::Assistant => return Phrase::Title.text(language),
            Author::Notice => return Phrase::AuthorNotice.text(language),
        }
    }
}
