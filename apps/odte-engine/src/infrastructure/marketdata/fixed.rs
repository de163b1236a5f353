//! In-memory market data adapter.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::application::ports::{MarketDataError, MarketDataPort};
use crate::domain::market_snapshot::SessionPrice;

/// Serves a fixed set of session prices.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketData {
    prices: HashMap<String, SessionPrice>,
}

impl StaticMarketData {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the price for `symbol`.
    #[must_use]
    pub fn with_price(mut self, symbol: impl Into<String>, current: f64, open: f64) -> Self {
        self.prices
            .insert(symbol.into(), SessionPrice::new(current, open));
        self
    }
}

#[async_trait]
impl MarketDataPort for StaticMarketData {
    async fn session_prices(
        &self,
        symbols: &[String],
    ) -> Result<HashMap<String, SessionPrice>, MarketDataError> {
        symbols
            .iter()
            .map(|symbol| {
                self.prices
                    .get(symbol)
                    .map(|price| (symbol.clone(), *price))
                    .ok_or_else(|| MarketDataError::DataUnavailable {
                        symbol: symbol.clone(),
                    })
            })
            .collect()
    }
}
