pub mod keyword;
pub mod remote;

use std::time::Duration;

use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ReplyPolicyBox;
use crate::domain::models::ReplyPolicyName;

pub struct ReplyPolicyManager {}

impl ReplyPolicyManager {
    pub fn get(name: ReplyPolicyName) -> Result<ReplyPolicyBox> {
        match name {
            ReplyPolicyName::Keyword => {
                let delay = Config::get(ConfigKey::ReplyDelay).parse::<u64>()?;
                return Ok(Box::new(keyword::KeywordPolicy::new(
                    &Config::get(ConfigKey::Balance),
                    Duration::from_millis(delay),
                )));
            }
            ReplyPolicyName::Remote => {
                return Ok(Box::<remote::RemoteAssistant>::default());
            }
        }
    }
}
