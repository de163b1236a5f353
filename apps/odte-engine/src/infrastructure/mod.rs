//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `marketdata/`: Yahoo chart adapter and an in-memory source
//! - `calendar/`: Finnhub economic calendar adapter, the blocking-event
//!   filter, and an in-memory calendar
//! - `rest/`: Shared JSON client with retry and backoff

pub mod calendar;
pub mod marketdata;
pub mod rest;
