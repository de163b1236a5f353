//! Market Data Adapters
//!
//! Implementations of `MarketDataPort`.

mod fixed;
pub mod yahoo;

pub use fixed::StaticMarketData;
pub use yahoo::{YahooConfig, YahooMarketDataAdapter};
