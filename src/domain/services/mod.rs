pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
pub mod clipboard;
pub mod connectivity;
pub mod events;
mod replies;
mod scroll;
mod simulator;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use replies::*;
pub use scroll::*;
pub use simulator::*;
