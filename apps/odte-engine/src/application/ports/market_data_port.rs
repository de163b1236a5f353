//! Market Data Port (Driven Port)
//!
//! Interface for fetching today's session prices from an external provider.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::market_snapshot::SessionPrice;

/// Market data error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarketDataError {
    /// Connection error or timeout.
    #[error("Market data network error: {0}")]
    Network(String),

    /// Provider returned a non-success status.
    #[error("Market data API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error details.
        message: String,
    },

    /// Response body could not be parsed.
    #[error("Market data parse error: {0}")]
    JsonParse(String),

    /// The provider has no prices for the symbol today.
    #[error("No market data for {symbol}")]
    DataUnavailable {
        /// The requested symbol.
        symbol: String,
    },
}

/// Port for fetching session prices.
///
/// Absence of data must be reported as `MarketDataError::DataUnavailable`,
/// never as a zero price.
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Latest and opening price for each symbol, keyed by symbol.
    async fn session_prices(
        &self,
        symbols: &[String],
    ) -> Result<HashMap<String, SessionPrice>, MarketDataError>;
}
