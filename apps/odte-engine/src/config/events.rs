//! Economic calendar configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::ports::EventFetchPolicy;
use crate::infrastructure::calendar::EventFilter;
use crate::infrastructure::calendar::finnhub::{DEFAULT_FINNHUB_BASE_URL, FinnhubConfig};
use crate::infrastructure::rest::RetryConfig;

/// Event calendar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Calendar API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key (from environment variable). Empty disables the lookup.
    #[serde(default)]
    pub api_key: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retry configuration.
    #[serde(default)]
    pub retry: RetryConfig,
    /// Which entries block a session.
    #[serde(default)]
    pub filter: EventFilter,
    /// Behaviour when the calendar cannot be reached.
    #[serde(default)]
    pub on_fetch_error: EventFetchPolicy,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            retry: RetryConfig::default(),
            filter: EventFilter::default(),
            on_fetch_error: EventFetchPolicy::default(),
        }
    }
}

impl EventsConfig {
    /// Adapter configuration.
    #[must_use]
    pub fn finnhub_config(&self) -> FinnhubConfig {
        FinnhubConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            retry: self.retry.clone(),
            filter: self.filter.clone(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_FINNHUB_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}
