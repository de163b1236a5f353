//! Market Snapshot Value Objects

use serde::{Deserialize, Serialize};

use super::errors::SnapshotError;

/// Latest traded price and session opening price for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionPrice {
    /// Latest traded price.
    pub current: f64,
    /// Opening price of the session.
    pub open: f64,
}

impl SessionPrice {
    /// Create a new session price.
    #[must_use]
    pub const fn new(current: f64, open: f64) -> Self {
        Self { current, open }
    }

    /// Signed percentage move since the open.
    ///
    /// Callers must ensure `open` is positive.
    #[must_use]
    pub fn change_pct(&self) -> f64 {
        (self.current - self.open) / self.open * 100.0
    }

    /// Absolute percentage move since the open (the opening range).
    #[must_use]
    pub fn opening_range_pct(&self) -> f64 {
        self.change_pct().abs()
    }

    /// Whether the instrument trades above its open.
    #[must_use]
    pub fn is_above_open(&self) -> bool {
        self.current > self.open
    }
}

/// Immutable market snapshot for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Traded underlying (XSP).
    pub underlying: SessionPrice,
    /// 30-day implied volatility index.
    pub vix: f64,
    /// 9-day implied volatility index.
    pub vix9d: f64,
    /// 1-day implied volatility index.
    pub vix1d: f64,
    /// Volatility of VIX.
    pub vvix: f64,
}

impl MarketSnapshot {
    /// Check that the snapshot carries real data.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError` when the underlying price is a placeholder,
    /// the opening price is degenerate, or a volatility level is invalid.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let current = self.underlying.current;
        if !current.is_finite() || current <= 0.0 {
            return Err(SnapshotError::CurrentPriceUnavailable { value: current });
        }

        let open = self.underlying.open;
        if !open.is_finite() || open <= 0.0 {
            return Err(SnapshotError::DegenerateOpeningPrice { value: open });
        }

        for (index, value) in [
            ("VIX", self.vix),
            ("VIX9D", self.vix9d),
            ("VIX1D", self.vix1d),
            ("VVIX", self.vvix),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SnapshotError::InvalidVolatilityLevel { index, value });
            }
        }

        Ok(())
    }

    /// Absolute percentage move of the underlying since the open.
    #[must_use]
    pub fn opening_range_pct(&self) -> f64 {
        self.underlying.opening_range_pct()
    }

    /// Whether the 1-day index trades above the 9-day index.
    #[must_use]
    pub fn front_end_inverted(&self) -> bool {
        self.vix1d > self.vix9d
    }
}
