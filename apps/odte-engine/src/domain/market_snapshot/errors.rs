//! Market Snapshot Errors

use thiserror::Error;

/// Reasons a snapshot cannot be evaluated.
///
/// Every variant means "data unavailable": the engine refuses to compute
/// gates or strikes from it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SnapshotError {
    /// Underlying current price is zero, negative, or not finite.
    #[error("Underlying current price unavailable (got {value})")]
    CurrentPriceUnavailable {
        /// The placeholder value received.
        value: f64,
    },

    /// Underlying opening price would make the opening range undefined.
    #[error("Underlying opening price is degenerate (got {value})")]
    DegenerateOpeningPrice {
        /// The value received.
        value: f64,
    },

    /// A volatility index level is negative or not finite.
    #[error("Invalid {index} level: {value}")]
    InvalidVolatilityLevel {
        /// Index name (VIX, VIX9D, VIX1D, VVIX).
        index: &'static str,
        /// The value received.
        value: f64,
    },

    /// The market data feed returned nothing for an instrument.
    #[error("No session data for instrument {symbol}")]
    MissingInstrument {
        /// Feed symbol that was requested.
        symbol: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SnapshotError::CurrentPriceUnavailable { value: 0.0 };
        assert_eq!(err.to_string(), "Underlying current price unavailable (got 0)");

        let err = SnapshotError::InvalidVolatilityLevel {
            index: "VIX",
            value: -1.5,
        };
        assert_eq!(err.to_string(), "Invalid VIX level: -1.5");

        let err = SnapshotError::MissingInstrument {
            symbol: "^VIX1D".to_string(),
        };
        assert!(err.to_string().contains("^VIX1D"));
    }
}
