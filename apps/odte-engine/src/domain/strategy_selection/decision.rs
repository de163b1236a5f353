//! Strategy Decision Value Objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::market_snapshot::SessionPrice;
use crate::domain::strike_sizing::{DeltaTier, StrikeLayout};

/// Outcome of the strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// High-impact event scheduled today.
    NoTradeNews,
    /// VVIX above the hard cutoff.
    NoTradeVvixExtreme,
    /// Neither structure qualifies.
    NoTradeNoSignal,
    /// All gates passed.
    IronCondor,
    /// Directional fallback.
    VerticalSpread,
}

impl Outcome {
    /// Whether this outcome opens a position.
    #[must_use]
    pub const fn is_trade(&self) -> bool {
        matches!(self, Self::IronCondor | Self::VerticalSpread)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTradeNews => write!(f, "NO_TRADE_NEWS"),
            Self::NoTradeVvixExtreme => write!(f, "NO_TRADE_VVIX_EXTREME"),
            Self::NoTradeNoSignal => write!(f, "NO_TRADE_NO_SIGNAL"),
            Self::IronCondor => write!(f, "IRON_CONDOR"),
            Self::VerticalSpread => write!(f, "VERTICAL_SPREAD"),
        }
    }
}

/// Direction of a vertical credit spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpreadDirection {
    /// Underlying above its open: sell a put spread.
    BullishSellPut,
    /// Underlying at or below its open: sell a call spread.
    BearishSellCall,
}

impl SpreadDirection {
    /// Direction implied by the underlying's move since the open.
    #[must_use]
    pub fn from_underlying(underlying: &SessionPrice) -> Self {
        if underlying.is_above_open() {
            Self::BullishSellPut
        } else {
            Self::BearishSellCall
        }
    }

    /// The strike sold from a two-sided layout.
    #[must_use]
    pub const fn sold_strike(&self, layout: &StrikeLayout) -> i64 {
        match self {
            Self::BullishSellPut => layout.lower,
            Self::BearishSellCall => layout.upper,
        }
    }

    /// The protective strike bought against the sold strike.
    #[must_use]
    pub const fn long_strike(&self, layout: &StrikeLayout) -> i64 {
        match self {
            Self::BullishSellPut => layout.long_put(),
            Self::BearishSellCall => layout.long_call(),
        }
    }
}

impl fmt::Display for SpreadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BullishSellPut => write!(f, "Bullish (sell put)"),
            Self::BearishSellCall => write!(f, "Bearish (sell call)"),
        }
    }
}

/// Iron condor at the 5-delta tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IronCondorPlan {
    /// Delta tier of the short strikes.
    pub delta_tier: DeltaTier,
    /// Short call strike.
    pub short_call: i64,
    /// Short put strike.
    pub short_put: i64,
    /// Protective call strike.
    pub long_call: i64,
    /// Protective put strike.
    pub long_put: i64,
    /// Wing width in points.
    pub wing_width: u32,
    /// Contracts to trade.
    pub contracts: u32,
    /// Maximum loss per contract.
    pub risk_per_contract: Decimal,
    /// Credit to collect per share (one third of the wing).
    pub credit_target: Decimal,
    /// Close the position if the underlying trades above this.
    pub stop_loss_upper: f64,
    /// Close the position if the underlying trades below this.
    pub stop_loss_lower: f64,
}

/// Vertical credit spread at the 3-delta tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalSpreadPlan {
    /// Delta tier of the short strike.
    pub delta_tier: DeltaTier,
    /// Put spread (bullish) or call spread (bearish).
    pub direction: SpreadDirection,
    /// Sold strike.
    pub short_strike: i64,
    /// Protective strike.
    pub long_strike: i64,
    /// Wing width in points.
    pub wing_width: u32,
    /// Contracts to trade.
    pub contracts: u32,
    /// Maximum loss per contract.
    pub risk_per_contract: Decimal,
}

/// Terminal output of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyDecision {
    /// Blocked by high-impact events.
    NoTradeNews {
        /// Event names that blocked the session.
        events: Vec<String>,
    },
    /// Blocked by extreme volatility of volatility.
    NoTradeVvixExtreme {
        /// Observed VVIX level.
        vvix: f64,
    },
    /// No structure qualifies.
    NoTradeNoSignal,
    /// Sell both sides.
    IronCondor(IronCondorPlan),
    /// Sell one side.
    VerticalSpread(VerticalSpreadPlan),
}

impl StrategyDecision {
    /// Outcome tag.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self {
            Self::NoTradeNews { .. } => Outcome::NoTradeNews,
            Self::NoTradeVvixExtreme { .. } => Outcome::NoTradeVvixExtreme,
            Self::NoTradeNoSignal => Outcome::NoTradeNoSignal,
            Self::IronCondor(_) => Outcome::IronCondor,
            Self::VerticalSpread(_) => Outcome::VerticalSpread,
        }
    }

    /// Delta tier, absent when not trading.
    #[must_use]
    pub const fn delta_tier(&self) -> Option<DeltaTier> {
        match self {
            Self::IronCondor(plan) => Some(plan.delta_tier),
            Self::VerticalSpread(plan) => Some(plan.delta_tier),
            _ => None,
        }
    }

    /// Sold call strike.
    #[must_use]
    pub const fn short_strike_upper(&self) -> Option<i64> {
        match self {
            Self::IronCondor(plan) => Some(plan.short_call),
            Self::VerticalSpread(plan) => match plan.direction {
                SpreadDirection::BearishSellCall => Some(plan.short_strike),
                SpreadDirection::BullishSellPut => None,
            },
            _ => None,
        }
    }

    /// Sold put strike.
    #[must_use]
    pub const fn short_strike_lower(&self) -> Option<i64> {
        match self {
            Self::IronCondor(plan) => Some(plan.short_put),
            Self::VerticalSpread(plan) => match plan.direction {
                SpreadDirection::BullishSellPut => Some(plan.short_strike),
                SpreadDirection::BearishSellCall => None,
            },
            _ => None,
        }
    }

    /// Wing width in points.
    #[must_use]
    pub const fn wing_width(&self) -> Option<u32> {
        match self {
            Self::IronCondor(plan) => Some(plan.wing_width),
            Self::VerticalSpread(plan) => Some(plan.wing_width),
            _ => None,
        }
    }

    /// Contracts to trade.
    #[must_use]
    pub const fn contracts(&self) -> Option<u32> {
        match self {
            Self::IronCondor(plan) => Some(plan.contracts),
            Self::VerticalSpread(plan) => Some(plan.contracts),
            _ => None,
        }
    }

    /// Direction of a vertical spread.
    #[must_use]
    pub const fn direction(&self) -> Option<SpreadDirection> {
        match self {
            Self::VerticalSpread(plan) => Some(plan.direction),
            _ => None,
        }
    }
}

impl fmt::Display for StrategyDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTradeNews { events } => {
                write!(f, "NO TRADE: high-impact events today ({})", events.join(", "))
            }
            Self::NoTradeVvixExtreme { vvix } => {
                write!(f, "NO TRADE: VVIX extreme ({vvix:.2})")
            }
            Self::NoTradeNoSignal => write!(f, "NO SIGNAL: no high-probability setup"),
            Self::IronCondor(plan) => write!(
                f,
                "IRON CONDOR ({}): CALL {} / PUT {}, wings {} pts, credit target {:.2}, {} contract(s), stop {:.2} / {:.2}",
                plan.delta_tier,
                plan.short_call,
                plan.short_put,
                plan.wing_width,
                plan.credit_target,
                plan.contracts,
                plan.stop_loss_upper,
                plan.stop_loss_lower
            ),
            Self::VerticalSpread(plan) => write!(
                f,
                "VERTICAL SPREAD ({}): {}, short {} / long {}, wings {} pts, {} contract(s)",
                plan.delta_tier,
                plan.direction,
                plan.short_strike,
                plan.long_strike,
                plan.wing_width,
                plan.contracts
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn layout() -> StrikeLayout {
        StrikeLayout {
            upper: 509,
            lower: 491,
            wing_width: 5,
        }
    }

    fn vertical(direction: SpreadDirection) -> StrategyDecision {
        StrategyDecision::VerticalSpread(VerticalSpreadPlan {
            delta_tier: DeltaTier::Three,
            direction,
            short_strike: direction.sold_strike(&layout()),
            long_strike: direction.long_strike(&layout()),
            wing_width: 5,
            contracts: 1,
            risk_per_contract: dec!(333.33),
        })
    }

    #[test]
    fn direction_from_underlying() {
        assert_eq!(
            SpreadDirection::from_underlying(&SessionPrice::new(505.0, 500.0)),
            SpreadDirection::BullishSellPut
        );
        assert_eq!(
            SpreadDirection::from_underlying(&SessionPrice::new(495.0, 500.0)),
            SpreadDirection::BearishSellCall
        );
        assert_eq!(
            SpreadDirection::from_underlying(&SessionPrice::new(500.0, 500.0)),
            SpreadDirection::BearishSellCall
        );
    }

    #[test]
    fn sold_and_long_strikes() {
        assert_eq!(SpreadDirection::BullishSellPut.sold_strike(&layout()), 491);
        assert_eq!(SpreadDirection::BullishSellPut.long_strike(&layout()), 486);
        assert_eq!(SpreadDirection::BearishSellCall.sold_strike(&layout()), 509);
        assert_eq!(SpreadDirection::BearishSellCall.long_strike(&layout()), 514);
    }

    #[test]
    fn vertical_populates_only_sold_side() {
        let bullish = vertical(SpreadDirection::BullishSellPut);
        assert_eq!(bullish.short_strike_lower(), Some(491));
        assert_eq!(bullish.short_strike_upper(), None);

        let bearish = vertical(SpreadDirection::BearishSellCall);
        assert_eq!(bearish.short_strike_upper(), Some(509));
        assert_eq!(bearish.short_strike_lower(), None);
        assert_eq!(bearish.direction(), Some(SpreadDirection::BearishSellCall));
        assert_eq!(bearish.delta_tier(), Some(DeltaTier::Three));
    }

    #[test]
    fn no_trade_has_no_structure() {
        let decision = StrategyDecision::NoTradeNoSignal;
        assert_eq!(decision.outcome(), Outcome::NoTradeNoSignal);
        assert!(!decision.outcome().is_trade());
        assert_eq!(decision.delta_tier(), None);
        assert_eq!(decision.contracts(), None);
        assert_eq!(decision.wing_width(), None);
        assert_eq!(decision.direction(), None);
    }

    #[test]
    fn serializes_with_outcome_tag() {
        let json = serde_json::to_value(StrategyDecision::NoTradeVvixExtreme { vvix: 130.0 }).unwrap();
        assert_eq!(json["outcome"], "NO_TRADE_VVIX_EXTREME");
        assert_eq!(json["vvix"], 130.0);

        let json = serde_json::to_value(vertical(SpreadDirection::BullishSellPut)).unwrap();
        assert_eq!(json["outcome"], "VERTICAL_SPREAD");
        assert_eq!(json["direction"], "BULLISH_SELL_PUT");
        assert_eq!(json["delta_tier"], 3);
        assert_eq!(json["short_strike"], 491);
    }

    #[test]
    fn display() {
        let decision = StrategyDecision::NoTradeNews {
            events: vec!["CPI m/m".to_string(), "FOMC Statement".to_string()],
        };
        assert_eq!(
            decision.to_string(),
            "NO TRADE: high-impact events today (CPI m/m, FOMC Statement)"
        );
        assert!(
            vertical(SpreadDirection::BearishSellCall)
                .to_string()
                .contains("Bearish (sell call), short 509 / long 514")
        );
        assert_eq!(Outcome::IronCondor.to_string(), "IRON_CONDOR");
    }
}
