use ratatui::style::Color;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Phrase;

/// Presentation variant of the chat shell. Both share the same conversation
/// behaviour and only differ in palette, quick actions and copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    Classic,
    Facelift,
}

impl Default for Variant {
    fn default() -> Variant {
        return Variant::Classic;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
}

impl Variant {
    pub fn parse(text: &str) -> Option<Variant> {
        return Variant::iter().find(|e| return e.to_string() == text);
    }

    pub fn palette(&self) -> Palette {
        match self {
            Variant::Classic => {
                return Palette {
                    primary: Color::Rgb(0, 122, 94),
                    accent: Color::Rgb(196, 138, 38),
                    muted: Color::Rgb(120, 130, 125),
                    error: Color::Rgb(220, 53, 69),
                }
            }
            Variant::Facelift => {
                return Palette {
                    primary: Color::Rgb(0, 94, 168),
                    accent: Color::Rgb(236, 112, 34),
                    muted: Color::Rgb(128, 138, 150),
                    error: Color::Rgb(214, 40, 57),
                }
            }
        }
    }

    /// The facelift shows a "New message" toast whenever a reply lands.
    pub fn announces_replies(&self) -> bool {
        return *self == Variant::Facelift;
    }

    /// The facelift lets the quick action panel be collapsed.
    pub fn collapsible_quick_actions(&self) -> bool {
        return *self == Variant::Facelift;
    }

    pub fn verify_description(&self) -> Phrase {
        match self {
            Variant::Classic => return Phrase::VerifyDescription,
            Variant::Facelift => return Phrase::VerifyDescriptionSensitive,
        }
    }
}
