//! Application Ports (Driven)
//!
//! Interfaces for the external collaborators the engine consumes. Both are
//! read-only feeds queried once per evaluation.

mod event_calendar_port;
mod market_data_port;

pub use event_calendar_port::{EventCalendarError, EventCalendarPort, EventFetchPolicy};
pub use market_data_port::{MarketDataError, MarketDataPort};
