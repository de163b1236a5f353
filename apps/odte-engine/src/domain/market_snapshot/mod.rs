//! Market Snapshot Bounded Context
//!
//! Point-in-time view of the underlying and the volatility complex for one
//! evaluation. Snapshots are validated once, before any gate or strategy
//! logic runs.

pub mod errors;
pub mod snapshot;

pub use errors::SnapshotError;
pub use snapshot::{MarketSnapshot, SessionPrice};
