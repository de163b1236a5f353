//! Account configuration for position sizing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account capital and per-session risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Account capital in account currency.
    #[serde(default = "default_capital")]
    pub capital: Decimal,
    /// Percent of capital at risk per session.
    #[serde(default = "default_risk_percent")]
    pub risk_percent: Decimal,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            capital: default_capital(),
            risk_percent: default_risk_percent(),
        }
    }
}

impl AccountConfig {
    /// Lowest accepted `risk_percent`.
    pub const MIN_RISK_PERCENT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
    /// Highest accepted `risk_percent`.
    pub const MAX_RISK_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 1);

    /// Risk as a fraction of capital (2.0% → 0.02).
    #[must_use]
    pub fn risk_fraction(&self) -> Decimal {
        self.risk_percent / Decimal::ONE_HUNDRED
    }
}

fn default_capital() -> Decimal {
    Decimal::from(25_000)
}

fn default_risk_percent() -> Decimal {
    Decimal::TWO
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults() {
        let account = AccountConfig::default();
        assert_eq!(account.capital, dec!(25000));
        assert_eq!(account.risk_fraction(), dec!(0.02));
    }

    #[test]
    fn risk_bounds() {
        assert_eq!(AccountConfig::MIN_RISK_PERCENT, dec!(0.5));
        assert_eq!(AccountConfig::MAX_RISK_PERCENT, dec!(5.0));
    }
}
