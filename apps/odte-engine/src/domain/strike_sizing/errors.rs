//! Strike & Sizing Errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from strike placement and position sizing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrikeSizingError {
    /// Delta not mapped to a tier.
    #[error("Unsupported delta tier: {0}")]
    UnsupportedDelta(u8),

    /// Account capital must be positive.
    #[error("Capital must be positive, got {0}")]
    NonPositiveCapital(Decimal),

    /// Risk fraction must be positive.
    #[error("Risk fraction must be positive, got {0}")]
    NonPositiveRiskFraction(Decimal),

    /// Wing width must be at least one point.
    #[error("Wing width must be positive")]
    ZeroWingWidth,

    /// Sizing policy is unusable.
    #[error("Invalid sizing policy: {0}")]
    InvalidPolicy(String),

    /// Budget or per-contract risk exceeds the decimal range.
    #[error("Sizing overflow for capital {capital} at risk fraction {risk_fraction}")]
    SizingOverflow {
        /// Account capital.
        capital: Decimal,
        /// Risk fraction.
        risk_fraction: Decimal,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn error_display() {
        assert_eq!(
            StrikeSizingError::NonPositiveCapital(dec!(-5)).to_string(),
            "Capital must be positive, got -5"
        );
        assert_eq!(
            StrikeSizingError::UnsupportedDelta(7).to_string(),
            "Unsupported delta tier: 7"
        );
    }
}
