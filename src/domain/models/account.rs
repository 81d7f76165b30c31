use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Placeholder account data shown in the summary card and interpolated into
/// balance replies. Nothing here is fetched from a bank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountSummary {
    pub customer_name: String,
    pub account_number: String,
    pub balance: String,
    pub last_login: String,
}

impl Default for AccountSummary {
    fn default() -> AccountSummary {
        return AccountSummary {
            customer_name: Config::default(ConfigKey::CustomerName),
            account_number: Config::default(ConfigKey::AccountNumber),
            balance: Config::default(ConfigKey::Balance),
            last_login: Config::default(ConfigKey::LastLogin),
        };
    }
}

impl AccountSummary {
    pub fn from_config() -> AccountSummary {
        return AccountSummary {
            customer_name: Config::get(ConfigKey::CustomerName),
            account_number: Config::get(ConfigKey::AccountNumber),
            balance: Config::get(ConfigKey::Balance),
            last_login: Config::get(ConfigKey::LastLogin),
        };
    }

    /// First character of the customer's name, used as the avatar.
    pub fn initial(&self) -> String {
        return self
            .customer_name
            .chars()
            .next()
            .map(|ch| return ch.to_string())
            .unwrap_or_default();
    }
}
