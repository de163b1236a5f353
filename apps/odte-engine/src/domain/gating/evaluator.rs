//! Gate evaluation.

use crate::domain::market_snapshot::MarketSnapshot;

use super::filter_result::FilterResult;
use super::thresholds::StrategyThresholds;

/// Evaluate the session gates with the default thresholds.
#[must_use]
pub fn evaluate_gates(snapshot: &MarketSnapshot) -> FilterResult {
    evaluate_gates_with(snapshot, &StrategyThresholds::default())
}

/// Evaluate the session gates.
///
/// The snapshot must already be validated; the opening price is used as a
/// divisor.
#[must_use]
pub fn evaluate_gates_with(
    snapshot: &MarketSnapshot,
    thresholds: &StrategyThresholds,
) -> FilterResult {
    let opening_range_pct = snapshot.opening_range_pct();

    FilterResult {
        term_structure_ok: snapshot.vix1d < snapshot.vix9d && snapshot.vix9d < snapshot.vix,
        vix_ceiling_ok: snapshot.vix < thresholds.vix_ceiling,
        vvix_ceiling_ok: snapshot.vvix < thresholds.vvix_ceiling,
        opening_range_ok: opening_range_pct < thresholds.opening_range_ceiling_pct,
        opening_range_pct,
    }
}
