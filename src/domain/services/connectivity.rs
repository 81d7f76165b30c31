#[cfg(test)]
#[path = "connectivity_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Event;

/// Maps reachability of a URL to online and offline signals for the chat.
pub struct ConnectivityService {
    url: String,
    interval: Duration,
    timeout: Duration,
}

impl ConnectivityService {
    pub fn new(url: &str, interval: Duration, timeout: Duration) -> ConnectivityService {
        return ConnectivityService {
            url: url.to_string(),
            interval,
            timeout,
        };
    }

    /// Probes never take longer than the interval between them. Both values
    /// must be non-zero.
    pub fn from_millis(url: &str, interval: u64, timeout: u64) -> Result<ConnectivityService> {
        if interval == 0 {
            bail!("connectivity-interval must be greater than 0");
        }
        if timeout == 0 {
            bail!("reply-timeout must be greater than 0");
        }

        return Ok(ConnectivityService::new(
            url,
            Duration::from_millis(interval),
            Duration::from_millis(interval.min(timeout)),
        ));
    }

    pub fn from_config() -> Result<ConnectivityService> {
        return ConnectivityService::from_millis(
            &Config::get(ConfigKey::ConnectivityURL),
            Config::get(ConfigKey::ConnectivityInterval).parse::<u64>()?,
            Config::get(ConfigKey::ReplyTimeout).parse::<u64>()?,
        );
    }

    /// Any HTTP response counts as online. Only transport failures mean the
    /// network is gone.
    pub async fn probe(&self) -> bool {
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await;

        if let Err(err) = res {
            tracing::debug!(error = ?err, url = self.url, "connectivity probe failed");
            return false;
        }

        return true;
    }

    /// Probes forever, sending an event only when the state flips. The chat
    /// starts out online.
    pub async fn start(self, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
        let mut online = true;
        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            let reachable = self.probe().await;
            if reachable != online {
                online = reachable;
                tracing::info!(online, "connectivity changed");
                tx.send(Event::ConnectivityChanged(online))?;
            }
        }
    }
}
