//! Strike & Sizing Bounded Context
//!
//! Pure functions turning an implied-volatility proxy into short strikes and
//! a wing width, and a wing width into a contract count.

pub mod delta_tier;
pub mod errors;
pub mod sizing;
pub mod strikes;

pub use delta_tier::DeltaTier;
pub use errors::StrikeSizingError;
pub use sizing::{PositionSize, SizingPolicy, contracts_for_risk, size_position};
pub use strikes::{
    StrikeLayout, StrikePolicy, TRADING_DAYS_PER_YEAR, one_day_sigma, strikes_and_wing,
    strikes_and_wing_with,
};
