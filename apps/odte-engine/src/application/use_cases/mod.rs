//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod evaluate_session;

pub use evaluate_session::{
    EvaluateSessionUseCase, InstrumentSymbols, SessionReport, SessionSettings,
};
