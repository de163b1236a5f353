//! Domain Layer
//!
//! Pure, synchronous decision logic with no I/O. Every function is a total,
//! idempotent computation over validated inputs.
//!
//! # Bounded Contexts
//!
//! - [`market_snapshot`]: Validated point-in-time prices
//! - [`gating`]: Session gates (term structure, VIX, VVIX, opening range)
//! - [`strategy_selection`]: First-match decision table and output record
//! - [`strike_sizing`]: Volatility-to-strike translation and risk sizing

pub mod gating;
pub mod market_snapshot;
pub mod strategy_selection;
pub mod strike_sizing;
