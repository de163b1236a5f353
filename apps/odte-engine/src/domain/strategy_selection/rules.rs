//! First-match decision table.
//!
//! Rules are evaluated in table order and the first match wins. Safety
//! vetoes come first, then the iron condor (all gates), then the vertical
//! spread (any one trigger), then no signal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::gating::{FilterResult, StrategyThresholds};
use crate::domain::market_snapshot::MarketSnapshot;

/// Inputs every rule guard can see.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Validated market snapshot.
    pub snapshot: &'a MarketSnapshot,
    /// Gate results for the snapshot.
    pub gates: &'a FilterResult,
    /// High-impact events today.
    pub events: &'a [String],
    /// Trigger levels.
    pub thresholds: &'a StrategyThresholds,
}

/// A guarded rule of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Any blocking event.
    NewsBlackout,
    /// VVIX above the hard cutoff.
    VvixExtreme,
    /// Every gate passed.
    IronCondor,
    /// Front-end inversion, elevated VVIX, or a wide opening range.
    VerticalSpread,
    /// Always matches.
    NoSignal,
}

/// Rules in priority order.
pub const DECISION_TABLE: [Rule; 5] = [
    Rule::NewsBlackout,
    Rule::VvixExtreme,
    Rule::IronCondor,
    Rule::VerticalSpread,
    Rule::NoSignal,
];

impl Rule {
    /// Whether the rule's guard holds.
    #[must_use]
    pub fn matches(self, ctx: &RuleContext<'_>) -> bool {
        match self {
            Self::NewsBlackout => !ctx.events.is_empty(),
            Self::VvixExtreme => ctx.snapshot.vvix > ctx.thresholds.vvix_extreme,
            Self::IronCondor => ctx.gates.all_passed(),
            Self::VerticalSpread => {
                ctx.snapshot.front_end_inverted()
                    || ctx.snapshot.vvix > ctx.thresholds.vvix_vertical_trigger
                    || ctx.gates.opening_range_pct
                        > ctx.thresholds.opening_range_vertical_trigger_pct
            }
            Self::NoSignal => true,
        }
    }

    /// First rule of the table whose guard holds.
    #[must_use]
    pub fn first_match(ctx: &RuleContext<'_>) -> Self {
        DECISION_TABLE
            .into_iter()
            .find(|rule| rule.matches(ctx))
            .unwrap_or(Self::NoSignal)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewsBlackout => write!(f, "news_blackout"),
            Self::VvixExtreme => write!(f, "vvix_extreme"),
            Self::IronCondor => write!(f, "iron_condor"),
            Self::VerticalSpread => write!(f, "vertical_spread"),
            Self::NoSignal => write!(f, "no_signal"),
        }
    }
}
