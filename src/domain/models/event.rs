use tui_textarea::Input;

use super::MessageType;
use super::ReplyResponse;

pub enum Event {
    ConnectivityChanged(bool),
    FileSelected(String),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLL(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    Notice(MessageType, String),
    ReplyFailed(u64, String),
    ReplyReady(ReplyResponse),
    TranscriptCopied(),
    UITick(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
}
