//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for the market data feed and the event calendar
//! - **Use Cases**: Session evaluation

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
