use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Author;
use super::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReplyPolicyName {
    Keyword,
    Remote,
}

impl ReplyPolicyName {
    pub fn parse(text: String) -> Option<ReplyPolicyName> {
        return ReplyPolicyName::iter().find(|e| return e.to_string() == text);
    }
}

/// What happens to replies that are still pending when the user submits
/// again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OverlapPolicy {
    /// A new submission cancels every pending reply.
    Supersede,
    /// Every submission gets its own reply, in whatever order they finish.
    Concurrent,
}

impl OverlapPolicy {
    pub fn parse(text: String) -> Option<OverlapPolicy> {
        return OverlapPolicy::iter().find(|e| return e.to_string() == text);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyPrompt {
    /// Id of the user message being answered.
    pub request_id: u64,
    pub text: String,
    pub language: Language,
}

impl ReplyPrompt {
    pub fn new(request_id: u64, text: &str, language: Language) -> ReplyPrompt {
        return ReplyPrompt {
            request_id,
            text: text.to_string(),
            language,
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyResponse {
    pub request_id: u64,
    pub author: Author,
    pub text: String,
}

#[async_trait]
pub trait ReplyPolicy {
    fn name(&self) -> ReplyPolicyName;

    /// Used at startup to verify the policy can answer. Failures are shown in
    /// the chat but don't stop the app.
    async fn health_check(&self) -> Result<()>;

    /// Produces the assistant reply for a single user utterance. Policies
    /// see only the latest utterance, never the conversation history.
    async fn get_reply(&self, prompt: &ReplyPrompt) -> Result<String>;
}

pub type ReplyPolicyBox = Box<dyn ReplyPolicy + Send + Sync>;
