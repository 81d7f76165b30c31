#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;
use crate::domain::models::ReplyPolicy;
use crate::domain::models::ReplyPolicyName;
use crate::domain::models::ReplyPrompt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ReplyRequest {
    text: String,
    language: Language,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ReplyBody {
    reply: String,
}

/// Forwards utterances to an HTTP assistant service instead of answering
/// locally.
pub struct RemoteAssistant {
    url: String,
    timeout: String,
}

impl Default for RemoteAssistant {
    fn default() -> RemoteAssistant {
        return RemoteAssistant {
            url: Config::get(ConfigKey::RemoteURL),
            timeout: Config::get(ConfigKey::ReplyTimeout),
        };
    }
}

impl RemoteAssistant {
    fn timeout(&self) -> Result<Duration> {
        return Ok(Duration::from_millis(self.timeout.parse::<u64>()?));
    }
}

#[async_trait]
impl ReplyPolicy for RemoteAssistant {
    fn name(&self) -> ReplyPolicyName {
        return ReplyPolicyName::Remote;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(self.timeout()?)
            .send()
            .await;

        if let Err(err) = res {
            tracing::error!(error = ?err, url = self.url, "Remote assistant is not reachable");
            bail!("Remote assistant at {} is not reachable", self.url);
        }

        let status = res?.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Remote assistant health check failed");
            bail!("Remote assistant health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn get_reply(&self, prompt: &ReplyPrompt) -> Result<String> {
        let req = ReplyRequest {
            text: prompt.text.to_string(),
            language: prompt.language,
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/reply", url = self.url))
            .timeout(self.timeout()?)
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make reply request to remote assistant"
            );
            bail!(
                "Remote assistant responded with status {}",
                res.status().as_u16()
            );
        }

        let body = res.json::<ReplyBody>().await?;
        tracing::debug!(request_id = prompt.request_id, "Remote reply received");

        return Ok(body.reply);
    }
}
