//! Gate and trigger thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds for the session gates and the strategy triggers.
///
/// Defaults are the calibrated XSP values. All comparisons against these
/// levels are strict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyThresholds {
    /// Gate: VIX must trade below this level.
    pub vix_ceiling: f64,
    /// Gate: VVIX must trade below this level.
    pub vvix_ceiling: f64,
    /// Gate: opening range (percent) must stay below this level.
    pub opening_range_ceiling_pct: f64,
    /// Hard cutoff: no trade when VVIX is above this level.
    pub vvix_extreme: f64,
    /// Vertical trigger: VVIX above this level.
    pub vvix_vertical_trigger: f64,
    /// Vertical trigger: opening range (percent) above this level.
    pub opening_range_vertical_trigger_pct: f64,
}

impl Default for StrategyThresholds {
    fn default() -> Self {
        Self {
            vix_ceiling: 16.0,
            vvix_ceiling: 88.0,
            opening_range_ceiling_pct: 0.40,
            vvix_extreme: 125.0,
            vvix_vertical_trigger: 105.0,
            opening_range_vertical_trigger_pct: 0.75,
        }
    }
}

impl StrategyThresholds {
    /// Check the thresholds are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns a description of the first inconsistency found.
    pub fn validate(&self) -> Result<(), String> {
        let levels = [
            ("vix_ceiling", self.vix_ceiling),
            ("vvix_ceiling", self.vvix_ceiling),
            ("opening_range_ceiling_pct", self.opening_range_ceiling_pct),
            ("vvix_extreme", self.vvix_extreme),
            ("vvix_vertical_trigger", self.vvix_vertical_trigger),
            (
                "opening_range_vertical_trigger_pct",
                self.opening_range_vertical_trigger_pct,
            ),
        ];
        for (name, value) in levels {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }

        if !(self.vvix_ceiling < self.vvix_vertical_trigger
            && self.vvix_vertical_trigger < self.vvix_extreme)
        {
            return Err(format!(
                "VVIX levels must be ordered vvix_ceiling < vvix_vertical_trigger < vvix_extreme, \
                 got {} / {} / {}",
                self.vvix_ceiling, self.vvix_vertical_trigger, self.vvix_extreme
            ));
        }

        if self.opening_range_ceiling_pct >= self.opening_range_vertical_trigger_pct {
            return Err(format!(
                "opening_range_ceiling_pct ({}) must be below opening_range_vertical_trigger_pct ({})",
                self.opening_range_ceiling_pct, self.opening_range_vertical_trigger_pct
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent() {
        let thresholds = StrategyThresholds::default();
        assert!(thresholds.validate().is_ok());
        assert_eq!(thresholds.vix_ceiling, 16.0);
        assert_eq!(thresholds.vvix_extreme, 125.0);
    }

    #[test]
    fn unordered_vvix_levels_rejected() {
        let thresholds = StrategyThresholds {
            vvix_vertical_trigger: 130.0,
            ..Default::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.contains("ordered"));
    }

    #[test]
    fn non_positive_level_rejected() {
        let thresholds = StrategyThresholds {
            vix_ceiling: 0.0,
            ..Default::default()
        };
        assert!(thresholds.validate().unwrap_err().contains("vix_ceiling"));
    }

    #[test]
    fn overlapping_range_levels_rejected() {
        let thresholds = StrategyThresholds {
            opening_range_ceiling_pct: 0.8,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let thresholds: StrategyThresholds =
            serde_yaml_bw::from_str("vix_ceiling: 17.5\n").unwrap();
        assert_eq!(thresholds.vix_ceiling, 17.5);
        assert_eq!(thresholds.vvix_ceiling, 88.0);
    }
}
