//! Event Calendar Adapters
//!
//! Implementations of `EventCalendarPort` and the filter that decides which
//! calendar entries block a session.

mod filter;
mod fixed;
pub mod finnhub;

pub use filter::{DEFAULT_BLOCKING_KEYWORDS, EventFilter};
pub use finnhub::{FinnhubCalendarAdapter, FinnhubConfig};
pub use fixed::StaticEventCalendar;
