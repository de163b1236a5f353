//! 0DTE Decision Engine Binary
//!
//! Evaluates today's session once and prints the report as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin odte-engine
//! ```
//!
//! # Environment Variables
//!
//! - `ODTE_CONFIG`: Path to the YAML config (default: config.yaml)
//! - `FINNHUB_API_KEY`: Economic calendar API key, referenced from config.yaml
//! - `RUST_LOG`: Overrides the configured log level

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;

use odte_engine::application::use_cases::EvaluateSessionUseCase;
use odte_engine::config::{Config, load_config};
use odte_engine::error::ErrorReport;
use odte_engine::infrastructure::calendar::FinnhubCalendarAdapter;
use odte_engine::infrastructure::marketdata::YahooMarketDataAdapter;
use odte_engine::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let config_path = std::env::var("ODTE_CONFIG").ok();
    let config = load_config(config_path.as_deref()).context("loading configuration")?;

    init_telemetry(&config.observability.logging)
        .map_err(|e| anyhow::anyhow!(e))
        .context("initializing tracing")?;

    tracing::info!(
        capital = %config.account.capital,
        risk_percent = %config.account.risk_percent,
        on_fetch_error = ?config.events.on_fetch_error,
        "Starting 0DTE decision engine"
    );

    warn_if_unconfirmed(&config);

    let market_data = YahooMarketDataAdapter::new(&config.market_data.yahoo_config())
        .context("building market data adapter")?;
    let calendar = FinnhubCalendarAdapter::new(&config.events.finnhub_config())
        .context("building event calendar adapter")?;

    let use_case = EvaluateSessionUseCase::new(
        Arc::new(market_data),
        Arc::new(calendar),
        config.selector(),
        config.session_settings(),
    );

    let today = Utc::now()
        .with_timezone(&config.session.utc_offset().map_err(anyhow::Error::msg)?)
        .date_naive();

    match use_case.execute(today).await {
        Ok(report) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("serializing session report")?
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(code = %e.code(), error = %e, "Session evaluation failed");
            println!(
                "{}",
                serde_json::to_string_pretty(&ErrorReport::from(&e))
                    .context("serializing error report")?
            );
            Err(e.into())
        }
    }
}

/// Warn when running before the opening range has settled.
fn warn_if_unconfirmed(config: &Config) {
    match config.session.before_confirmation(Utc::now()) {
        Ok(true) => tracing::warn!(
            confirmation_time = %config.session.confirmation_time,
            "Running before the confirmation time, opening range may not be settled"
        ),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "Could not evaluate confirmation time"),
    }
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
