// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! 0DTE Decision Engine - Rust Core Library
//!
//! Deterministic same-day options decision engine for XSP. From one market
//! snapshot and the day's high-impact events it decides whether to sell an
//! iron condor, sell a vertical spread, or stand aside, and derives the
//! strikes, wing width and contract count.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure, synchronous decision logic
//!   - `market_snapshot`: Snapshot value objects and validation
//!   - `gating`: Session gates and thresholds
//!   - `strategy_selection`: First-match decision table
//!   - `strike_sizing`: Volatility-implied strikes and risk-budget sizing
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `MarketDataPort`, `EventCalendarPort`
//!   - `use_cases`: `EvaluateSessionUseCase`
//!
//! - **Infrastructure**: Adapters
//!   - `marketdata`: Yahoo chart adapter
//!   - `calendar`: Finnhub economic calendar adapter
//!   - `rest`: Shared JSON client with retry
//!
//! # Example
//!
//! ```
//! use odte_engine::domain::gating::evaluate_gates;
//! use odte_engine::domain::market_snapshot::{MarketSnapshot, SessionPrice};
//! use odte_engine::domain::strategy_selection::{Outcome, select_strategy};
//! use rust_decimal_macros::dec;
//!
//! let snapshot = MarketSnapshot {
//!     underlying: SessionPrice::new(500.0, 499.0),
//!     vix: 15.0,
//!     vix9d: 14.0,
//!     vix1d: 12.0,
//!     vvix: 85.0,
//! };
//! let gates = evaluate_gates(&snapshot);
//! let decision = select_strategy(&snapshot, &gates, &[], dec!(25000), dec!(0.02)).unwrap();
//! assert_eq!(decision.outcome(), Outcome::IronCondor);
//! assert_eq!(decision.short_strike_upper(), Some(508));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core decision logic with no I/O.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Engine error types and codes.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::gating::{FilterResult, StrategyThresholds, evaluate_gates};
pub use domain::market_snapshot::{MarketSnapshot, SessionPrice};
pub use domain::strategy_selection::{Outcome, StrategyDecision, StrategySelector, select_strategy};
pub use domain::strike_sizing::{DeltaTier, contracts_for_risk, strikes_and_wing};

// Application re-exports
pub use application::ports::{EventCalendarPort, EventFetchPolicy, MarketDataPort};
pub use application::use_cases::{EvaluateSessionUseCase, SessionReport};

// Error re-exports
pub use error::{EngineError, ErrorCode};
