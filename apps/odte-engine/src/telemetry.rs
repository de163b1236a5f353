//! Tracing Setup
//!
//! Installs a `tracing-subscriber` fmt subscriber configured from
//! `observability.logging`.
//!
//! # Configuration
//!
//! - `RUST_LOG`: overrides the configured level when set
//!
//! # Usage
//!
//! ```rust,ignore
//! use odte_engine::telemetry::init_telemetry;
//!
//! let config = load_config(None)?;
//! init_telemetry(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::LoggingConfig;

/// Error installing the global subscriber.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr so stdout stays free for the session report.
///
/// # Errors
///
/// Returns an error if the level directive is invalid or a global
/// subscriber is already installed.
pub fn init_telemetry(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(&config.level, std::env::var("RUST_LOG").ok().as_deref())?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match config.format.as_str() {
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.json().try_init(),
    }
}

/// Filter from `RUST_LOG` if present, else from the configured level.
fn build_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, ParseError> {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_used_without_rust_log() {
        let filter = build_filter("debug", None).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn rust_log_overrides_level() {
        let filter = build_filter("info", Some("odte_engine=trace")).unwrap();
        assert_eq!(filter.to_string(), "odte_engine=trace");
    }

    #[test]
    fn blank_rust_log_is_ignored() {
        let filter = build_filter("warn", Some("  ")).unwrap();
        assert_eq!(filter.to_string(), "warn");
    }
}
