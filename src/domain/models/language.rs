use serde::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, EnumIter, EnumVariantNames, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Default for Language {
    fn default() -> Language {
        return Language::En;
    }
}

impl Language {
    pub fn parse(text: &str) -> Option<Language> {
        return Language::iter().find(|e| return e.to_string() == text);
    }

    pub fn toggle(&self) -> Language {
        match self {
            Language::En => return Language::Ar,
            Language::Ar => return Language::En,
        }
    }

    /// Short label shown on the language toggle, naming the language you would
    /// switch to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => return "عر",
            Language::Ar => return "EN",
        }
    }
}
