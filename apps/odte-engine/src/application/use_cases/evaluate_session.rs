//! Evaluate Session Use Case
//!
//! Fetches the blocking events and the market snapshot for a date, then runs
//! the pure pipeline: validate → gates → decision table → strikes & size.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::{EventCalendarPort, EventFetchPolicy, MarketDataPort};
use crate::domain::gating::{FilterResult, evaluate_gates_with};
use crate::domain::market_snapshot::{MarketSnapshot, SessionPrice, SnapshotError};
use crate::domain::strategy_selection::{StrategyDecision, StrategySelector};
use crate::error::EngineError;

/// Feed symbols for the instruments in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentSymbols {
    /// Traded underlying.
    pub underlying: String,
    /// 30-day volatility index.
    pub vix: String,
    /// 9-day volatility index.
    pub vix9d: String,
    /// 1-day volatility index.
    pub vix1d: String,
    /// Volatility of VIX.
    pub vvix: String,
}

impl Default for InstrumentSymbols {
    fn default() -> Self {
        Self {
            underlying: "^XSP".to_string(),
            vix: "^VIX".to_string(),
            vix9d: "^VIX9D".to_string(),
            vix1d: "^VIX1D".to_string(),
            vvix: "^VVIX".to_string(),
        }
    }
}

impl InstrumentSymbols {
    /// All symbols in request order.
    #[must_use]
    pub fn all(&self) -> Vec<String> {
        vec![
            self.underlying.clone(),
            self.vix.clone(),
            self.vix9d.clone(),
            self.vix1d.clone(),
            self.vvix.clone(),
        ]
    }
}

/// Per-account inputs for an evaluation.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Feed symbols.
    pub symbols: InstrumentSymbols,
    /// Account capital.
    pub capital: Decimal,
    /// Fraction of capital at risk per session.
    pub risk_fraction: Decimal,
    /// Behaviour when the calendar cannot be reached.
    pub event_fetch_policy: EventFetchPolicy,
}

/// Everything computed for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Session date.
    pub date: NaiveDate,
    /// High-impact events that block the session.
    pub blocking_events: Vec<String>,
    /// Snapshot used, absent when the session was blocked before fetching.
    pub snapshot: Option<MarketSnapshot>,
    /// Gate results, absent when the session was blocked before fetching.
    pub gates: Option<FilterResult>,
    /// Selected strategy.
    pub decision: StrategyDecision,
}

impl SessionReport {
    /// Whether every gate passed.
    #[must_use]
    pub fn tradeable(&self) -> bool {
        self.gates.as_ref().is_some_and(FilterResult::all_passed)
    }
}

/// Use case for evaluating one trading session.
pub struct EvaluateSessionUseCase<M, E>
where
    M: MarketDataPort,
    E: EventCalendarPort,
{
    market_data: Arc<M>,
    calendar: Arc<E>,
    selector: StrategySelector,
    settings: SessionSettings,
}

impl<M, E> EvaluateSessionUseCase<M, E>
where
    M: MarketDataPort,
    E: EventCalendarPort,
{
    /// Create a new EvaluateSessionUseCase.
    pub const fn new(
        market_data: Arc<M>,
        calendar: Arc<E>,
        selector: StrategySelector,
        settings: SessionSettings,
    ) -> Self {
        Self {
            market_data,
            calendar,
            selector,
            settings,
        }
    }

    /// Execute the use case.
    ///
    /// A news day short-circuits before market data is requested.
    pub async fn execute(&self, date: NaiveDate) -> Result<SessionReport, EngineError> {
        // 1. Blocking events
        let events = self.blocking_events(date).await?;
        if !events.is_empty() {
            tracing::info!(%date, events = ?events, "High-impact events today, not trading");
            return Ok(SessionReport {
                date,
                blocking_events: events.clone(),
                snapshot: None,
                gates: None,
                decision: StrategyDecision::NoTradeNews { events },
            });
        }

        // 2. Snapshot
        let snapshot = self.fetch_snapshot().await?;
        snapshot.validate()?;

        // 3. Gates
        let gates = evaluate_gates_with(&snapshot, self.selector.thresholds());
        tracing::debug!(
            term_structure_ok = gates.term_structure_ok,
            vix_ceiling_ok = gates.vix_ceiling_ok,
            vvix_ceiling_ok = gates.vvix_ceiling_ok,
            opening_range_ok = gates.opening_range_ok,
            opening_range_pct = gates.opening_range_pct,
            "Gates evaluated"
        );

        // 4. Decision
        let decision = self.selector.select(
            &snapshot,
            &gates,
            &events,
            self.settings.capital,
            self.settings.risk_fraction,
        )?;
        tracing::info!(
            %date,
            outcome = %decision.outcome(),
            contracts = ?decision.contracts(),
            "Strategy selected"
        );

        Ok(SessionReport {
            date,
            blocking_events: events,
            snapshot: Some(snapshot),
            gates: Some(gates),
            decision,
        })
    }

    async fn blocking_events(&self, date: NaiveDate) -> Result<Vec<String>, EngineError> {
        match self.calendar.high_impact_events(date).await {
            Ok(events) => Ok(events),
            Err(e) => match self.settings.event_fetch_policy {
                EventFetchPolicy::FailOpen => {
                    tracing::warn!(
                        error = %e,
                        "Event calendar unavailable, proceeding without blocking events (fail-open)"
                    );
                    Ok(Vec::new())
                }
                EventFetchPolicy::FailClosed => Err(EngineError::EventFetchFailure(e)),
            },
        }
    }

    async fn fetch_snapshot(&self) -> Result<MarketSnapshot, EngineError> {
        let symbols = &self.settings.symbols;
        let prices = self.market_data.session_prices(&symbols.all()).await?;

        let lookup = |symbol: &String| -> Result<SessionPrice, SnapshotError> {
            prices
                .get(symbol)
                .copied()
                .ok_or_else(|| SnapshotError::MissingInstrument {
                    symbol: symbol.clone(),
                })
        };

        Ok(MarketSnapshot {
            underlying: lookup(&symbols.underlying)?,
            vix: lookup(&symbols.vix)?.current,
            vix9d: lookup(&symbols.vix9d)?.current,
            vix1d: lookup(&symbols.vix1d)?.current,
            vvix: lookup(&symbols.vvix)?.current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{EventCalendarError, MarketDataError};
    use crate::domain::strategy_selection::Outcome;
    use crate::error::ErrorCode;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockMarketData {
        prices: HashMap<String, SessionPrice>,
        calls: AtomicUsize,
    }

    impl MockMarketData {
        fn new(prices: &[(&str, f64, f64)]) -> Self {
            Self {
                prices: prices
                    .iter()
                    .map(|(s, c, o)| ((*s).to_string(), SessionPrice::new(*c, *o)))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calm() -> Self {
            Self::new(&[
                ("^XSP", 500.0, 499.0),
                ("^VIX", 15.0, 15.2),
                ("^VIX9D", 14.0, 14.1),
                ("^VIX1D", 12.0, 12.5),
                ("^VVIX", 85.0, 86.0),
            ])
        }
    }

    #[async_trait]
    impl MarketDataPort for MockMarketData {
        async fn session_prices(
            &self,
            _symbols: &[String],
        ) -> Result<HashMap<String, SessionPrice>, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.prices.clone())
        }
    }

    enum MockCalendar {
        Events(Vec<String>),
        Failing,
    }

    #[async_trait]
    impl EventCalendarPort for MockCalendar {
        async fn high_impact_events(
            &self,
            _date: NaiveDate,
        ) -> Result<Vec<String>, EventCalendarError> {
            match self {
                Self::Events(events) => Ok(events.clone()),
                Self::Failing => Err(EventCalendarError::Network("connection refused".to_string())),
            }
        }
    }

    fn settings(policy: EventFetchPolicy) -> SessionSettings {
        SessionSettings {
            symbols: InstrumentSymbols::default(),
            capital: dec!(25000),
            risk_fraction: dec!(0.02),
            event_fetch_policy: policy,
        }
    }

    fn use_case(
        market: MockMarketData,
        calendar: MockCalendar,
        policy: EventFetchPolicy,
    ) -> (
        EvaluateSessionUseCase<MockMarketData, MockCalendar>,
        Arc<MockMarketData>,
    ) {
        let market = Arc::new(market);
        let uc = EvaluateSessionUseCase::new(
            Arc::clone(&market),
            Arc::new(calendar),
            StrategySelector::default(),
            settings(policy),
        );
        (uc, market)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[tokio::test]
    async fn calm_session_selects_iron_condor() {
        let (uc, _) = use_case(
            MockMarketData::calm(),
            MockCalendar::Events(vec![]),
            EventFetchPolicy::FailOpen,
        );
        let report = uc.execute(today()).await.unwrap();
        assert_eq!(report.decision.outcome(), Outcome::IronCondor);
        assert!(report.tradeable());
        assert_eq!(report.decision.short_strike_upper(), Some(508));
        assert_eq!(report.decision.short_strike_lower(), Some(492));
        assert!(report.snapshot.is_some());
    }

    #[tokio::test]
    async fn news_day_skips_market_data() {
        let (uc, market) = use_case(
            MockMarketData::calm(),
            MockCalendar::Events(vec!["FOMC Press Conference".to_string()]),
            EventFetchPolicy::FailOpen,
        );
        let report = uc.execute(today()).await.unwrap();
        assert_eq!(report.decision.outcome(), Outcome::NoTradeNews);
        assert_eq!(report.blocking_events, vec!["FOMC Press Conference"]);
        assert!(report.snapshot.is_none());
        assert!(!report.tradeable());
        assert_eq!(market.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn calendar_failure_fails_open_by_default() {
        let (uc, _) = use_case(
            MockMarketData::calm(),
            MockCalendar::Failing,
            EventFetchPolicy::FailOpen,
        );
        let report = uc.execute(today()).await.unwrap();
        assert!(report.blocking_events.is_empty());
        assert_eq!(report.decision.outcome(), Outcome::IronCondor);
    }

    #[tokio::test]
    async fn calendar_failure_fails_closed_when_configured() {
        let (uc, market) = use_case(
            MockMarketData::calm(),
            MockCalendar::Failing,
            EventFetchPolicy::FailClosed,
        );
        let err = uc.execute(today()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::EventFetchFailure);
        assert_eq!(market.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn placeholder_price_is_data_unavailable() {
        let (uc, _) = use_case(
            MockMarketData::new(&[
                ("^XSP", 0.0, 0.0),
                ("^VIX", 15.0, 15.0),
                ("^VIX9D", 14.0, 14.0),
                ("^VIX1D", 12.0, 12.0),
                ("^VVIX", 85.0, 85.0),
            ]),
            MockCalendar::Events(vec![]),
            EventFetchPolicy::FailOpen,
        );
        let err = uc.execute(today()).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::DataUnavailable(SnapshotError::CurrentPriceUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn missing_instrument_is_data_unavailable() {
        let (uc, _) = use_case(
            MockMarketData::new(&[("^XSP", 500.0, 499.0), ("^VIX", 15.0, 15.0)]),
            MockCalendar::Events(vec![]),
            EventFetchPolicy::FailOpen,
        );
        let err = uc.execute(today()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::DataUnavailable);
        assert!(err.to_string().contains("^VIX9D"));
    }

    #[tokio::test]
    async fn repeated_execution_is_idempotent() {
        let (uc, _) = use_case(
            MockMarketData::calm(),
            MockCalendar::Events(vec![]),
            EventFetchPolicy::FailOpen,
        );
        let first = uc.execute(today()).await.unwrap();
        let second = uc.execute(today()).await.unwrap();
        assert_eq!(first, second);
    }
}
