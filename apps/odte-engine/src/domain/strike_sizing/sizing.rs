//! Risk-budget position sizing.
//!
//! A defined-risk spread that collects `wing / divisor` in credit can lose
//! at most `wing * (divisor - 1) / divisor` per share. With the default
//! one-third credit target that is two thirds of the wing, times the
//! contract multiplier:
//!
//! ```text
//! risk_per_contract = wing * (2/3) * 100
//! contracts = max(1, floor(capital * risk_fraction / risk_per_contract))
//! ```
//!
//! The arithmetic is done in `Decimal` and rearranged so the division by
//! three is exact.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::errors::StrikeSizingError;

/// Contract economics used for sizing and trade management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingPolicy {
    /// Shares per contract.
    pub contract_multiplier: u32,
    /// Credit target is `wing / credit_target_divisor`.
    pub credit_target_divisor: u32,
    /// Stop-loss distance from spot, in percent of the underlying.
    pub stop_loss_offset_pct: Decimal,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            contract_multiplier: 100,
            credit_target_divisor: 3,
            stop_loss_offset_pct: Decimal::new(8, 1),
        }
    }
}

impl SizingPolicy {
    /// Check the policy is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` describing the problem.
    pub fn validate(&self) -> Result<(), StrikeSizingError> {
        if self.contract_multiplier == 0 {
            return Err(StrikeSizingError::InvalidPolicy(
                "contract_multiplier must be positive".to_string(),
            ));
        }
        if self.credit_target_divisor < 2 {
            return Err(StrikeSizingError::InvalidPolicy(format!(
                "credit_target_divisor must be at least 2, got {}",
                self.credit_target_divisor
            )));
        }
        if self.stop_loss_offset_pct <= Decimal::ZERO {
            return Err(StrikeSizingError::InvalidPolicy(format!(
                "stop_loss_offset_pct must be positive, got {}",
                self.stop_loss_offset_pct
            )));
        }
        Ok(())
    }

    /// Credit to collect per share for a wing width.
    #[must_use]
    pub fn credit_target(&self, wing_width: u32) -> Decimal {
        Decimal::from(wing_width) / Decimal::from(self.credit_target_divisor)
    }

    /// Maximum loss per contract net of the credit target.
    #[must_use]
    pub fn risk_per_contract(&self, wing_width: u32) -> Decimal {
        let divisor = Decimal::from(self.credit_target_divisor);
        // three u32 factors stay below 2^96
        Decimal::from(wing_width) * (divisor - Decimal::ONE) * Decimal::from(self.contract_multiplier)
            / divisor
    }

    /// Stop-loss levels (upper, lower) around the current underlying price.
    #[must_use]
    pub fn stop_loss_levels(&self, price: f64) -> (f64, f64) {
        let offset = self.stop_loss_offset_pct.to_f64().unwrap_or(0.0) / 100.0;
        (price * (1.0 + offset), price * (1.0 - offset))
    }
}

/// Result of sizing a spread against the session risk budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSize {
    /// Contracts to trade, never below one.
    pub contracts: u32,
    /// Maximum loss per contract.
    pub risk_per_contract: Decimal,
    /// Capital times risk fraction.
    pub risk_budget: Decimal,
    /// The budget did not cover one contract; the minimum of one was applied.
    pub at_minimum: bool,
}

impl PositionSize {
    /// Worst-case loss of the whole position.
    #[must_use]
    pub fn max_loss(&self) -> Decimal {
        self.risk_per_contract.saturating_mul(Decimal::from(self.contracts))
    }
}

/// Contracts for a wing width with the default policy.
///
/// # Errors
///
/// Returns an error for non-positive capital, risk fraction, or wing width.
pub fn contracts_for_risk(
    wing_width: u32,
    capital: Decimal,
    risk_fraction: Decimal,
) -> Result<u32, StrikeSizingError> {
    size_position(wing_width, capital, risk_fraction, &SizingPolicy::default())
        .map(|size| size.contracts)
}

/// Size a spread against the risk budget.
///
/// # Errors
///
/// Returns an error for non-positive capital, risk fraction, or wing width,
/// an unusable policy, or a budget outside the decimal range.
pub fn size_position(
    wing_width: u32,
    capital: Decimal,
    risk_fraction: Decimal,
    policy: &SizingPolicy,
) -> Result<PositionSize, StrikeSizingError> {
    if capital <= Decimal::ZERO {
        return Err(StrikeSizingError::NonPositiveCapital(capital));
    }
    if risk_fraction <= Decimal::ZERO {
        return Err(StrikeSizingError::NonPositiveRiskFraction(risk_fraction));
    }
    if wing_width == 0 {
        return Err(StrikeSizingError::ZeroWingWidth);
    }
    policy.validate()?;

    let overflow = || StrikeSizingError::SizingOverflow {
        capital,
        risk_fraction,
    };
    let divisor = Decimal::from(policy.credit_target_divisor);
    let risk_budget = capital.checked_mul(risk_fraction).ok_or_else(overflow)?;

    // budget / (wing * (d - 1) / d * multiplier), with the division by d moved up
    let numerator = risk_budget.checked_mul(divisor).ok_or_else(overflow)?;
    let denominator = Decimal::from(wing_width)
        * (divisor - Decimal::ONE)
        * Decimal::from(policy.contract_multiplier);
    let raw = numerator
        .checked_div(denominator)
        .ok_or_else(overflow)?
        .floor()
        .to_u32()
        .unwrap_or(u32::MAX);

    Ok(PositionSize {
        contracts: raw.max(1),
        risk_per_contract: policy.risk_per_contract(wing_width),
        risk_budget,
        at_minimum: raw == 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test]
    fn one_contract_for_default_account() {
        // 25000 * 2% = 500 budget, 5 * 2/3 * 100 = 333.33 per contract
        let size = size_position(5, dec!(25000), dec!(0.02), &SizingPolicy::default()).unwrap();
        assert_eq!(size.contracts, 1);
        assert!(!size.at_minimum);
        assert_eq!(size.risk_budget, dec!(500.00));
        assert_eq!(size.risk_per_contract.round_dp(2), dec!(333.33));
    }

    #[test_case(3, dec!(25000), dec!(0.02), 2 ; "narrow wing doubles up")]
    #[test_case(5, dec!(100000), dec!(0.02), 6 ; "larger account")]
    #[test_case(5, dec!(50000), dec!(0.02), 3 ; "exact multiple")]
    #[test_case(5, dec!(1000), dec!(0.005), 1 ; "budget below one contract")]
    fn contracts(wing: u32, capital: Decimal, risk: Decimal, expected: u32) {
        assert_eq!(contracts_for_risk(wing, capital, risk).unwrap(), expected);
    }

    #[test]
    fn exact_multiple_is_not_truncated() {
        // 1000 budget / 333.33... is exactly 3 with decimal rearrangement
        let size = size_position(5, dec!(50000), dec!(0.02), &SizingPolicy::default()).unwrap();
        assert_eq!(size.contracts, 3);
        assert_eq!(size.max_loss().round_dp(2), dec!(1000));
    }

    #[test]
    fn minimum_of_one_is_flagged() {
        let size = size_position(5, dec!(1000), dec!(0.005), &SizingPolicy::default()).unwrap();
        assert_eq!(size.contracts, 1);
        assert!(size.at_minimum);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert_eq!(
            contracts_for_risk(5, Decimal::ZERO, dec!(0.02)),
            Err(StrikeSizingError::NonPositiveCapital(Decimal::ZERO))
        );
        assert_eq!(
            contracts_for_risk(5, dec!(25000), dec!(-0.01)),
            Err(StrikeSizingError::NonPositiveRiskFraction(dec!(-0.01)))
        );
        assert_eq!(
            contracts_for_risk(0, dec!(25000), dec!(0.02)),
            Err(StrikeSizingError::ZeroWingWidth)
        );
    }

    #[test]
    fn rejects_invalid_policy() {
        let policy = SizingPolicy {
            credit_target_divisor: 1,
            ..Default::default()
        };
        assert!(matches!(
            size_position(5, dec!(25000), dec!(0.02), &policy),
            Err(StrikeSizingError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn oversized_budget_is_an_error() {
        assert_eq!(
            contracts_for_risk(5, Decimal::MAX, Decimal::ONE),
            Err(StrikeSizingError::SizingOverflow {
                capital: Decimal::MAX,
                risk_fraction: Decimal::ONE,
            })
        );
        assert!(matches!(
            contracts_for_risk(5, Decimal::MAX, dec!(2)),
            Err(StrikeSizingError::SizingOverflow { .. })
        ));
    }

    #[test]
    fn huge_budget_saturates_contracts() {
        let size = size_position(
            1,
            dec!(100000000000000000000),
            Decimal::ONE,
            &SizingPolicy::default(),
        )
        .unwrap();
        assert_eq!(size.contracts, u32::MAX);
    }

    #[test]
    fn widest_policy_still_sizes() {
        let policy = SizingPolicy {
            contract_multiplier: u32::MAX,
            credit_target_divisor: u32::MAX,
            ..Default::default()
        };
        let size = size_position(u32::MAX, dec!(25000), dec!(0.02), &policy).unwrap();
        assert_eq!(size.contracts, 1);
        assert!(size.at_minimum);
    }

    #[test]
    fn credit_target_is_a_third_of_the_wing() {
        let policy = SizingPolicy::default();
        assert_eq!(policy.credit_target(3), Decimal::ONE);
        assert_eq!(policy.credit_target(5).round_dp(2), dec!(1.67));
    }

    #[test]
    fn stop_loss_levels() {
        let (upper, lower) = SizingPolicy::default().stop_loss_levels(500.0);
        assert!((upper - 504.0).abs() < 1e-9);
        assert!((lower - 496.0).abs() < 1e-9);
    }
}
