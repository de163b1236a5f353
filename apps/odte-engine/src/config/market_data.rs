//! Market data provider configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::use_cases::InstrumentSymbols;
use crate::infrastructure::marketdata::yahoo::{DEFAULT_YAHOO_BASE_URL, YahooConfig};
use crate::infrastructure::rest::RetryConfig;

/// Market data configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataConfig {
    /// Chart API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retry configuration.
    #[serde(default)]
    pub retry: RetryConfig,
    /// Feed symbols for each instrument.
    #[serde(default)]
    pub symbols: InstrumentSymbols,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            retry: RetryConfig::default(),
            symbols: InstrumentSymbols::default(),
        }
    }
}

impl MarketDataConfig {
    /// Adapter configuration.
    #[must_use]
    pub fn yahoo_config(&self) -> YahooConfig {
        YahooConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            retry: self.retry.clone(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_YAHOO_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}
