//! Strategy selection.

use rust_decimal::Decimal;

use crate::domain::gating::{FilterResult, StrategyThresholds};
use crate::domain::market_snapshot::MarketSnapshot;
use crate::domain::strike_sizing::{
    DeltaTier, SizingPolicy, StrikePolicy, StrikeSizingError, size_position, strikes_and_wing_with,
};

use super::decision::{IronCondorPlan, SpreadDirection, StrategyDecision, VerticalSpreadPlan};
use super::rules::{Rule, RuleContext};

/// Select a strategy with default thresholds and policies.
///
/// # Errors
///
/// Returns an error only when a trade is selected and the capital or risk
/// fraction is not positive.
pub fn select_strategy(
    snapshot: &MarketSnapshot,
    gates: &FilterResult,
    events: &[String],
    capital: Decimal,
    risk_fraction: Decimal,
) -> Result<StrategyDecision, StrikeSizingError> {
    StrategySelector::default().select(snapshot, gates, events, capital, risk_fraction)
}

/// Stateless strategy selector over the decision table.
#[derive(Debug, Clone, Default)]
pub struct StrategySelector {
    thresholds: StrategyThresholds,
    strikes: StrikePolicy,
    sizing: SizingPolicy,
}

impl StrategySelector {
    /// Create a selector with custom thresholds and policies.
    #[must_use]
    pub const fn new(
        thresholds: StrategyThresholds,
        strikes: StrikePolicy,
        sizing: SizingPolicy,
    ) -> Self {
        Self {
            thresholds,
            strikes,
            sizing,
        }
    }

    /// Trigger thresholds in use.
    #[must_use]
    pub const fn thresholds(&self) -> &StrategyThresholds {
        &self.thresholds
    }

    /// Decide the structure for the session.
    ///
    /// # Errors
    ///
    /// Returns an error only when a trade is selected and sizing fails.
    pub fn select(
        &self,
        snapshot: &MarketSnapshot,
        gates: &FilterResult,
        events: &[String],
        capital: Decimal,
        risk_fraction: Decimal,
    ) -> Result<StrategyDecision, StrikeSizingError> {
        let ctx = RuleContext {
            snapshot,
            gates,
            events,
            thresholds: &self.thresholds,
        };

        match Rule::first_match(&ctx) {
            Rule::NewsBlackout => Ok(StrategyDecision::NoTradeNews {
                events: events.to_vec(),
            }),
            Rule::VvixExtreme => Ok(StrategyDecision::NoTradeVvixExtreme {
                vvix: snapshot.vvix,
            }),
            Rule::IronCondor => self.iron_condor(snapshot, capital, risk_fraction),
            Rule::VerticalSpread => self.vertical_spread(snapshot, capital, risk_fraction),
            Rule::NoSignal => Ok(StrategyDecision::NoTradeNoSignal),
        }
    }

    fn iron_condor(
        &self,
        snapshot: &MarketSnapshot,
        capital: Decimal,
        risk_fraction: Decimal,
    ) -> Result<StrategyDecision, StrikeSizingError> {
        let price = snapshot.underlying.current;
        let layout = strikes_and_wing_with(price, snapshot.vix, DeltaTier::Five, &self.strikes);
        let size = size_position(layout.wing_width, capital, risk_fraction, &self.sizing)?;
        let (stop_loss_upper, stop_loss_lower) = self.sizing.stop_loss_levels(price);

        Ok(StrategyDecision::IronCondor(IronCondorPlan {
            delta_tier: DeltaTier::Five,
            short_call: layout.upper,
            short_put: layout.lower,
            long_call: layout.long_call(),
            long_put: layout.long_put(),
            wing_width: layout.wing_width,
            contracts: size.contracts,
            risk_per_contract: size.risk_per_contract,
            credit_target: self.sizing.credit_target(layout.wing_width),
            stop_loss_upper,
            stop_loss_lower,
        }))
    }

    fn vertical_spread(
        &self,
        snapshot: &MarketSnapshot,
        capital: Decimal,
        risk_fraction: Decimal,
    ) -> Result<StrategyDecision, StrikeSizingError> {
        let direction = SpreadDirection::from_underlying(&snapshot.underlying);
        let layout = strikes_and_wing_with(
            snapshot.underlying.current,
            snapshot.vix,
            DeltaTier::Three,
            &self.strikes,
        );
        let size = size_position(layout.wing_width, capital, risk_fraction, &self.sizing)?;

        Ok(StrategyDecision::VerticalSpread(VerticalSpreadPlan {
            delta_tier: DeltaTier::Three,
            direction,
            short_strike: direction.sold_strike(&layout),
            long_strike: direction.long_strike(&layout),
            wing_width: layout.wing_width,
            contracts: size.contracts,
            risk_per_contract: size.risk_per_contract,
        }))
    }
}
