//! Finnhub Economic Calendar Adapter
//!
//! REST implementation of `EventCalendarPort` over Finnhub's
//! `calendar/economic` endpoint, filtered for the session date.

mod adapter;
mod api_types;

pub use adapter::{DEFAULT_FINNHUB_BASE_URL, FinnhubCalendarAdapter, FinnhubConfig};
