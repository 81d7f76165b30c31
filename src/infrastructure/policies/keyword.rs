#[cfg(test)]
#[path = "keyword_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::ReplyPolicy;
use crate::domain::models::ReplyPolicyName;
use crate::domain::models::ReplyPrompt;

const BALANCE_TRIGGERS: [&str; 2] = ["balance", "رصيد"];
const TRANSFER_TRIGGERS: [&str; 2] = ["transfer", "تحويل"];

const TRANSFER_REPLY: &str = "I can help you with money transfers. Would you like to transfer within Al Bilad accounts or to other banks?\n\nيمكنني مساعدتك في تحويل الأموال. هل تود التحويل داخل بنك البلاد أم لبنوك أخرى؟";
const FALLBACK_REPLY: &str = "Thank you for your message. I understand your inquiry and will provide you with the best assistance. How else can I help?\n\nشكراً لك على رسالتك. سأقوم بمساعدتك بأفضل طريقة ممكنة. كيف يمكنني مساعدتك أكثر؟";

/// Maps an utterance to a canned bilingual reply. Balance questions win over
/// transfer questions when both keywords appear.
pub fn generate_reply(text: &str, balance: &str) -> String {
    let lowered = text.to_lowercase();

    if BALANCE_TRIGGERS
        .iter()
        .any(|trigger| return lowered.contains(trigger))
    {
        return format!("Your current account balance is {balance}. Is there anything specific you'd like to know about your account?\n\nرصيدك الحالي هو {balance}. هل تود معرفة أي معلومات إضافية؟");
    }

    if TRANSFER_TRIGGERS
        .iter()
        .any(|trigger| return lowered.contains(trigger))
    {
        return TRANSFER_REPLY.to_string();
    }

    return FALLBACK_REPLY.to_string();
}

/// The offline mock assistant. Waits a fixed latency and answers from the
/// keyword table.
pub struct KeywordPolicy {
    balance: String,
    latency: Duration,
}

impl KeywordPolicy {
    pub fn new(balance: &str, latency: Duration) -> KeywordPolicy {
        return KeywordPolicy {
            balance: balance.to_string(),
            latency,
        };
    }
}

#[async_trait]
impl ReplyPolicy for KeywordPolicy {
    fn name(&self) -> ReplyPolicyName {
        return ReplyPolicyName::Keyword;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn get_reply(&self, prompt: &ReplyPrompt) -> Result<String> {
        tokio::time::sleep(self.latency).await;
        return Ok(generate_reply(&prompt.text, &self.balance));
    }
}
