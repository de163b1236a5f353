//! Configuration module for the decision engine.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for the engine and its adapters.
//!
//! # Usage
//!
//! ```rust,ignore
//! use odte_engine::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("capital: {}", config.account.capital);
//! ```

mod account;
mod events;
mod market_data;
mod observability;
mod session;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::use_cases::SessionSettings;
use crate::domain::gating::StrategyThresholds;
use crate::domain::strategy_selection::StrategySelector;
use crate::domain::strike_sizing::{SizingPolicy, StrikePolicy};

pub use account::AccountConfig;
pub use events::EventsConfig;
pub use market_data::MarketDataConfig;
pub use observability::{LOG_FORMATS, LoggingConfig, ObservabilityConfig};
pub use session::SessionConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Account capital and risk.
    #[serde(default)]
    pub account: AccountConfig,
    /// Gate and trigger thresholds.
    #[serde(default)]
    pub thresholds: StrategyThresholds,
    /// Wing width selection.
    #[serde(default)]
    pub strikes: StrikePolicy,
    /// Contract economics.
    #[serde(default)]
    pub sizing: SizingPolicy,
    /// Market data provider.
    #[serde(default)]
    pub market_data: MarketDataConfig,
    /// Economic calendar provider.
    #[serde(default)]
    pub events: EventsConfig,
    /// Session timing.
    #[serde(default)]
    pub session: SessionConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Strategy selector built from the policy sections.
    #[must_use]
    pub fn selector(&self) -> StrategySelector {
        StrategySelector::new(
            self.thresholds.clone(),
            self.strikes.clone(),
            self.sizing.clone(),
        )
    }

    /// Per-account inputs for the session use case.
    #[must_use]
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            symbols: self.market_data.symbols.clone(),
            capital: self.account.capital,
            risk_fraction: self.account.risk_fraction(),
            event_fetch_policy: self.events.on_fetch_error,
        }
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let invalid = ConfigError::ValidationError;

    // Account
    if config.account.capital <= Decimal::ZERO {
        return Err(invalid(format!(
            "account.capital must be positive, got {}",
            config.account.capital
        )));
    }
    let risk = config.account.risk_percent;
    if risk < AccountConfig::MIN_RISK_PERCENT || risk > AccountConfig::MAX_RISK_PERCENT {
        return Err(invalid(format!(
            "account.risk_percent must be between {} and {}, got {risk}",
            AccountConfig::MIN_RISK_PERCENT,
            AccountConfig::MAX_RISK_PERCENT
        )));
    }

    // Policies
    config
        .thresholds
        .validate()
        .map_err(|e| invalid(format!("thresholds: {e}")))?;
    config
        .strikes
        .validate()
        .map_err(|e| invalid(format!("strikes: {e}")))?;
    config
        .sizing
        .validate()
        .map_err(|e| invalid(format!("sizing: {e}")))?;

    // Providers
    let providers = [
        (
            "market_data",
            &config.market_data.base_url,
            config.market_data.timeout_secs,
            config.market_data.retry.max_attempts,
        ),
        (
            "events",
            &config.events.base_url,
            config.events.timeout_secs,
            config.events.retry.max_attempts,
        ),
    ];
    for (section, base_url, timeout_secs, max_attempts) in providers {
        if base_url.trim().is_empty() {
            return Err(invalid(format!("{section}.base_url must not be empty")));
        }
        if timeout_secs == 0 {
            return Err(invalid(format!("{section}.timeout_secs must be positive")));
        }
        if max_attempts == 0 {
            return Err(invalid(format!(
                "{section}.retry.max_attempts must be at least 1"
            )));
        }
    }

    let symbols = &config.market_data.symbols;
    let named = [
        ("underlying", &symbols.underlying),
        ("vix", &symbols.vix),
        ("vix9d", &symbols.vix9d),
        ("vix1d", &symbols.vix1d),
        ("vvix", &symbols.vvix),
    ];
    for (name, symbol) in named {
        if symbol.trim().is_empty() {
            return Err(invalid(format!(
                "market_data.symbols.{name} must not be empty"
            )));
        }
    }

    // Session
    config
        .session
        .confirmation_time()
        .map_err(|e| invalid(format!("session: {e}")))?;
    config
        .session
        .utc_offset()
        .map_err(|e| invalid(format!("session: {e}")))?;

    // Logging
    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(invalid(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}
