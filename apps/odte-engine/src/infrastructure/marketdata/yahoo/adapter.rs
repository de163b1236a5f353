//! Yahoo Finance chart adapter implementing `MarketDataPort`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{MarketDataError, MarketDataPort};
use crate::domain::market_snapshot::SessionPrice;
use crate::infrastructure::rest::{RestClient, RestError, RetryConfig};

use super::api_types::ChartResponse;

/// Default public chart endpoint host.
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo adapter configuration.
#[derive(Debug, Clone)]
pub struct YahooConfig {
    /// API base URL.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry configuration.
    pub retry: RetryConfig,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            retry: RetryConfig::default(),
        }
    }
}

/// Market data from today's 1-minute chart.
///
/// Current price is the last printed close, open is the first printed open.
#[derive(Debug, Clone)]
pub struct YahooMarketDataAdapter {
    client: RestClient,
}

impl YahooMarketDataAdapter {
    /// Create a new Yahoo adapter.
    ///
    /// # Errors
    ///
    /// Returns `MarketDataError::Network` if the HTTP client cannot be built.
    pub fn new(config: &YahooConfig) -> Result<Self, MarketDataError> {
        let client = RestClient::new(&config.base_url, config.timeout, config.retry.clone())
            .map_err(|e| MarketDataError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    async fn session_price(&self, symbol: &str) -> Result<SessionPrice, MarketDataError> {
        let path = format!("/v8/finance/chart/{}", urlencoding::encode(symbol));
        let response: ChartResponse = self
            .client
            .get_json(&path, &[("range", "1d"), ("interval", "1m")])
            .await
            .map_err(|e| map_rest_error(symbol, e))?;

        let Some(price) = response.session_price() else {
            if let Some(err) = &response.chart.error {
                tracing::debug!(
                    symbol,
                    code = %err.code,
                    description = %err.description,
                    "Chart API reported an error"
                );
            }
            return Err(MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
            });
        };

        tracing::debug!(
            symbol,
            current = price.current,
            open = price.open,
            "Fetched session price"
        );
        Ok(price)
    }
}

#[async_trait]
impl MarketDataPort for YahooMarketDataAdapter {
    async fn session_prices(
        &self,
        symbols: &[String],
    ) -> Result<HashMap<String, SessionPrice>, MarketDataError> {
        let mut prices = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let price = self.session_price(symbol).await?;
            prices.insert(symbol.clone(), price);
        }
        Ok(prices)
    }
}

fn map_rest_error(symbol: &str, err: RestError) -> MarketDataError {
    match err {
        RestError::Status { status: 404, .. } => MarketDataError::DataUnavailable {
            symbol: symbol.to_string(),
        },
        RestError::Status { status, message } => MarketDataError::Api { status, message },
        RestError::JsonParse(msg) => MarketDataError::JsonParse(msg),
        RestError::Network(msg) => MarketDataError::Network(msg),
        err @ RestError::MaxRetriesExceeded { .. } => MarketDataError::Network(err.to_string()),
    }
}
