use std::path::PathBuf;

pub enum Action {
    AttachFile(PathBuf),
    CopyTranscript(String),
}
