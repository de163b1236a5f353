//! Error handling for the decision engine.
//!
//! `EngineError` is what the use case returns. Each variant maps to a
//! stable `ErrorCode` for machine consumers of the JSON report.
//!
//! | Code | Meaning |
//! |------|---------|
//! | `DATA_UNAVAILABLE` | Snapshot missing, placeholder, or degenerate |
//! | `MARKET_DATA_ERROR` | Market data feed failed |
//! | `EVENT_FETCH_FAILURE` | Calendar failed under the fail-closed policy |
//! | `INVALID_SIZING_INPUT` | Capital, risk fraction, or sizing policy invalid |

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::application::ports::{EventCalendarError, MarketDataError};
use crate::domain::market_snapshot::SnapshotError;
use crate::domain::strike_sizing::StrikeSizingError;

/// Error codes for the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Snapshot cannot be evaluated.
    DataUnavailable,
    /// Market data feed failed.
    MarketDataError,
    /// Event calendar failed and the policy is fail-closed.
    EventFetchFailure,
    /// Capital, risk fraction, or sizing policy invalid.
    InvalidSizingInput,
}

impl ErrorCode {
    /// Reason string for logs and reports.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::DataUnavailable => "DATA_UNAVAILABLE",
            Self::MarketDataError => "MARKET_DATA_ERROR",
            Self::EventFetchFailure => "EVENT_FETCH_FAILURE",
            Self::InvalidSizingInput => "INVALID_SIZING_INPUT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Errors surfaced by a session evaluation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The snapshot carries placeholder or degenerate data.
    #[error("Market data unavailable: {0}")]
    DataUnavailable(#[from] SnapshotError),

    /// The market data collaborator failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// The event calendar failed and the policy is fail-closed.
    #[error("Event calendar fetch failed: {0}")]
    EventFetchFailure(#[source] EventCalendarError),

    /// Sizing inputs are invalid.
    #[error("Invalid sizing input: {0}")]
    Sizing(#[from] StrikeSizingError),
}

impl EngineError {
    /// Stable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DataUnavailable(_) => ErrorCode::DataUnavailable,
            Self::MarketData(MarketDataError::DataUnavailable { .. }) => {
                ErrorCode::DataUnavailable
            }
            Self::MarketData(_) => ErrorCode::MarketDataError,
            Self::EventFetchFailure(_) => ErrorCode::EventFetchFailure,
            Self::Sizing(_) => ErrorCode::InvalidSizingInput,
        }
    }
}

/// Serializable error body for the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl From<&EngineError> for ErrorReport {
    fn from(err: &EngineError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
