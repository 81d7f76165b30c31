mod account;
mod action;
mod author;
mod conversation;
mod event;
mod language;
mod message;
mod phrases;
mod quick_actions;
mod reply;
mod slash_commands;
mod textarea;
mod toast;
mod typing;
mod variant;

pub use account::*;
pub use action::*;
pub use author::*;
pub use conversation::*;
pub use event::*;
pub use language::*;
pub use message::*;
pub use phrases::*;
pub use quick_actions::*;
pub use reply::*;
pub use slash_commands::*;
pub use textarea::*;
pub use toast::*;
pub use typing::*;
pub use variant::*;
