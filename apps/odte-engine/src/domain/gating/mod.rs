//! Gating Bounded Context
//!
//! Four independent predicates over the market snapshot that decide whether
//! the session qualifies for the tightest structure.

pub mod evaluator;
pub mod filter_result;
pub mod thresholds;

pub use evaluator::{evaluate_gates, evaluate_gates_with};
pub use filter_result::{FilterCheck, FilterResult, GateFilter};
pub use thresholds::StrategyThresholds;
