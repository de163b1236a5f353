//! Volatility-to-strike translation.
//!
//! The short strikes sit a fixed number of one-day standard deviations from
//! spot, with the one-day move implied by an annualized volatility index:
//!
//! ```text
//! sigma_1d = (vix / 100) / sqrt(252)
//! distance = price * sigma_1d * multiplier(delta)
//! ```
//!
//! Strikes are rounded to the nearest integer, half away from zero.

use serde::{Deserialize, Serialize};

use super::delta_tier::DeltaTier;

/// Trading days per year used to de-annualize volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Wing width selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrikePolicy {
    /// Use the narrow wing when the volatility level is below this.
    pub narrow_wing_below_vix: f64,
    /// Narrow wing width in points.
    pub narrow_wing_width: u32,
    /// Standard wing width in points.
    pub standard_wing_width: u32,
}

impl Default for StrikePolicy {
    fn default() -> Self {
        Self {
            narrow_wing_below_vix: 14.0,
            narrow_wing_width: 3,
            standard_wing_width: 5,
        }
    }
}

impl StrikePolicy {
    /// Wing width for a volatility level.
    #[must_use]
    pub fn wing_width(&self, vix_level: f64) -> u32 {
        if vix_level < self.narrow_wing_below_vix {
            self.narrow_wing_width
        } else {
            self.standard_wing_width
        }
    }

    /// Check the policy is usable.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem.
    pub fn validate(&self) -> Result<(), String> {
        if self.narrow_wing_width == 0 || self.standard_wing_width == 0 {
            return Err("wing widths must be at least one point".to_string());
        }
        if !self.narrow_wing_below_vix.is_finite() || self.narrow_wing_below_vix < 0.0 {
            return Err(format!(
                "narrow_wing_below_vix must be non-negative, got {}",
                self.narrow_wing_below_vix
            ));
        }
        Ok(())
    }
}

/// Short strikes on both sides of spot plus the wing width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeLayout {
    /// Short call strike (above spot).
    pub upper: i64,
    /// Short put strike (below spot).
    pub lower: i64,
    /// Distance to the protective strikes, in points.
    pub wing_width: u32,
}

impl StrikeLayout {
    /// Points between the two short strikes.
    #[must_use]
    pub const fn short_spread(&self) -> i64 {
        self.upper - self.lower
    }

    /// Protective call strike above the short call.
    #[must_use]
    pub const fn long_call(&self) -> i64 {
        self.upper + self.wing_width as i64
    }

    /// Protective put strike below the short put.
    #[must_use]
    pub const fn long_put(&self) -> i64 {
        self.lower - self.wing_width as i64
    }
}

/// Expected one-day move as a fraction of price.
#[must_use]
pub fn one_day_sigma(vix_level: f64) -> f64 {
    (vix_level / 100.0) / TRADING_DAYS_PER_YEAR.sqrt()
}

/// Short strikes and wing width with the default wing policy.
#[must_use]
pub fn strikes_and_wing(price: f64, vix_level: f64, delta_tier: DeltaTier) -> StrikeLayout {
    strikes_and_wing_with(price, vix_level, delta_tier, &StrikePolicy::default())
}

/// Short strikes and wing width.
///
/// Total for finite inputs; the caller guarantees `price > 0`.
#[must_use]
pub fn strikes_and_wing_with(
    price: f64,
    vix_level: f64,
    delta_tier: DeltaTier,
    policy: &StrikePolicy,
) -> StrikeLayout {
    let distance = price * one_day_sigma(vix_level) * delta_tier.sigma_multiplier();

    StrikeLayout {
        upper: (price + distance).round() as i64,
        lower: (price - distance).round() as i64,
        wing_width: policy.wing_width(vix_level),
    }
}
