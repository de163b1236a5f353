//! Strategy Selection Bounded Context
//!
//! Picks exactly one outcome per session from an ordered decision table and
//! fills in strikes and size for the selected structure.
//!
//! # Key Concepts
//!
//! - **Decision table**: guarded rules, first match wins
//! - **Iron condor**: 5-delta, needs every gate
//! - **Vertical spread**: 3-delta, needs any one trigger, direction from the open

pub mod decision;
pub mod rules;
pub mod selector;

pub use decision::{IronCondorPlan, Outcome, SpreadDirection, StrategyDecision, VerticalSpreadPlan};
pub use rules::{DECISION_TABLE, Rule, RuleContext};
pub use selector::{StrategySelector, select_strategy};
