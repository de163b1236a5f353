//! Yahoo Finance Market Data Adapter
//!
//! REST implementation of `MarketDataPort` over the public chart endpoint,
//! one request per symbol with a 1-day range at 1-minute bars.

mod adapter;
mod api_types;

pub use adapter::{DEFAULT_YAHOO_BASE_URL, YahooConfig, YahooMarketDataAdapter};
