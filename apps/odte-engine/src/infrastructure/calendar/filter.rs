//! High-impact event filter.

use serde::{Deserialize, Serialize};

/// Keywords that mark an event as blocking.
pub const DEFAULT_BLOCKING_KEYWORDS: [&str; 9] = [
    "CPI",
    "FED",
    "FOMC",
    "NFP",
    "POWELL",
    "UNEMPLOYMENT",
    "INTEREST RATE",
    "PPI",
    "EARNINGS",
];

/// Selects the calendar entries that block a session.
///
/// An entry blocks when its country and impact match and its name contains
/// any keyword. Country and impact compare case-insensitively; keywords
/// match against the upper-cased event name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventFilter {
    /// ISO country code.
    pub country: String,
    /// Impact level.
    pub impact: String,
    /// Name fragments that block trading.
    pub keywords: Vec<String>,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            country: "US".to_string(),
            impact: "high".to_string(),
            keywords: DEFAULT_BLOCKING_KEYWORDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl EventFilter {
    /// Whether an entry blocks the session.
    ///
    /// Country and impact ignore ASCII case, so `"us"`/`"High"` match the
    /// defaults.
    #[must_use]
    pub fn blocks(&self, country: &str, impact: &str, event: &str) -> bool {
        if !country.eq_ignore_ascii_case(&self.country) || !impact.eq_ignore_ascii_case(&self.impact)
        {
            return false;
        }
        let name = event.to_uppercase();
        self.keywords
            .iter()
            .any(|keyword| name.contains(&keyword.to_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("US", "high", "FOMC Press Conference", true ; "fomc")]
    #[test_case("US", "high", "Core CPI MoM", true ; "cpi")]
    #[test_case("US", "high", "Fed Chair Powell Speaks", true ; "powell")]
    #[test_case("US", "high", "Initial Jobless Claims", false ; "no keyword")]
    #[test_case("US", "medium", "CPI YoY", false ; "medium impact")]
    #[test_case("EU", "high", "ECB Interest Rate Decision", false ; "other country")]
    #[test_case("us", "High", "interest rate decision", true ; "case insensitive")]
    fn blocks(country: &str, impact: &str, event: &str, expected: bool) {
        assert_eq!(EventFilter::default().blocks(country, impact, event), expected);
    }

    #[test]
    fn custom_keywords() {
        let filter = EventFilter {
            keywords: vec!["gdp".to_string()],
            ..EventFilter::default()
        };
        assert!(filter.blocks("US", "high", "GDP Growth Rate QoQ"));
        assert!(!filter.blocks("US", "high", "FOMC Minutes"));
    }

    #[test]
    fn empty_keywords_block_nothing() {
        let filter = EventFilter {
            keywords: Vec::new(),
            ..EventFilter::default()
        };
        assert!(!filter.blocks("US", "high", "FOMC Minutes"));
    }
}
