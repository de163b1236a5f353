//! Filter Result Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four session gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateFilter {
    /// VIX1D < VIX9D < VIX.
    TermStructure,
    /// VIX below its ceiling.
    VixCeiling,
    /// VVIX below its ceiling.
    VvixCeiling,
    /// Opening range below its ceiling.
    OpeningRange,
}

impl GateFilter {
    /// All gates in display order.
    pub const ALL: [Self; 4] = [
        Self::TermStructure,
        Self::VixCeiling,
        Self::VvixCeiling,
        Self::OpeningRange,
    ];
}

impl fmt::Display for GateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TermStructure => write!(f, "VIX1D < VIX9D < VIX"),
            Self::VixCeiling => write!(f, "VIX ceiling"),
            Self::VvixCeiling => write!(f, "VVIX ceiling"),
            Self::OpeningRange => write!(f, "Opening range ceiling"),
        }
    }
}

/// Outcome of a single gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCheck {
    /// Which gate.
    pub filter: GateFilter,
    /// Whether it passed.
    pub passed: bool,
}

/// Per-session gate results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    /// VIX1D < VIX9D < VIX, strictly.
    pub term_structure_ok: bool,
    /// VIX below the ceiling.
    pub vix_ceiling_ok: bool,
    /// VVIX below the ceiling.
    pub vvix_ceiling_ok: bool,
    /// Opening range below the ceiling.
    pub opening_range_ok: bool,
    /// Absolute percentage move of the underlying since the open.
    pub opening_range_pct: f64,
}

impl FilterResult {
    /// Whether every gate passed ("tradeable today").
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.term_structure_ok && self.vix_ceiling_ok && self.vvix_ceiling_ok && self.opening_range_ok
    }

    /// Result for a single gate.
    #[must_use]
    pub const fn passed(&self, filter: GateFilter) -> bool {
        match filter {
            GateFilter::TermStructure => self.term_structure_ok,
            GateFilter::VixCeiling => self.vix_ceiling_ok,
            GateFilter::VvixCeiling => self.vvix_ceiling_ok,
            GateFilter::OpeningRange => self.opening_range_ok,
        }
    }

    /// Named gate results in display order.
    #[must_use]
    pub fn checks(&self) -> [FilterCheck; 4] {
        GateFilter::ALL.map(|filter| FilterCheck {
            filter,
            passed: self.passed(filter),
        })
    }

    /// Gates that failed, in display order.
    #[must_use]
    pub fn failed(&self) -> Vec<GateFilter> {
        GateFilter::ALL
            .into_iter()
            .filter(|filter| !self.passed(*filter))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(ts: bool, vix: bool, vvix: bool, range: bool) -> FilterResult {
        FilterResult {
            term_structure_ok: ts,
            vix_ceiling_ok: vix,
            vvix_ceiling_ok: vvix,
            opening_range_ok: range,
            opening_range_pct: 0.1,
        }
    }

    #[test]
    fn all_passed_requires_every_gate() {
        assert!(result(true, true, true, true).all_passed());
        assert!(!result(false, true, true, true).all_passed());
        assert!(!result(true, true, true, false).all_passed());
    }

    #[test]
    fn checks_in_display_order() {
        let checks = result(true, false, true, false).checks();
        assert_eq!(checks[0].filter, GateFilter::TermStructure);
        assert!(checks[0].passed);
        assert_eq!(checks[1].filter, GateFilter::VixCeiling);
        assert!(!checks[1].passed);
        assert_eq!(checks[3].filter, GateFilter::OpeningRange);
    }

    #[test]
    fn failed_lists_only_failures() {
        let failed = result(true, false, true, false).failed();
        assert_eq!(failed, vec![GateFilter::VixCeiling, GateFilter::OpeningRange]);
        assert!(result(true, true, true, true).failed().is_empty());
    }

    #[test]
    fn gate_filter_display() {
        assert_eq!(GateFilter::TermStructure.to_string(), "VIX1D < VIX9D < VIX");
        assert_eq!(GateFilter::OpeningRange.to_string(), "Opening range ceiling");
    }
}
