//! Event Calendar Port (Driven Port)
//!
//! Interface for looking up today's high-impact economic events.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Event calendar error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventCalendarError {
    /// Connection error or timeout.
    #[error("Calendar network error: {0}")]
    Network(String),

    /// API key rejected.
    #[error("Calendar authentication failed")]
    Unauthorized,

    /// Provider returned a non-success status.
    #[error("Calendar API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error details.
        message: String,
    },

    /// Response body could not be parsed.
    #[error("Calendar parse error: {0}")]
    JsonParse(String),
}

/// What to do when the calendar cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFetchPolicy {
    /// Proceed as if no events were scheduled, logging the failure.
    #[default]
    FailOpen,
    /// Abort the evaluation with the failure.
    FailClosed,
}

/// Port for the economic calendar.
#[async_trait]
pub trait EventCalendarPort: Send + Sync {
    /// Names of the high-impact events scheduled on `date`.
    async fn high_impact_events(&self, date: NaiveDate) -> Result<Vec<String>, EventCalendarError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_fail_open() {
        assert_eq!(EventFetchPolicy::default(), EventFetchPolicy::FailOpen);
    }

    #[test]
    fn policy_from_yaml() {
        let policy: EventFetchPolicy = serde_yaml_bw::from_str("fail_closed").unwrap();
        assert_eq!(policy, EventFetchPolicy::FailClosed);
    }
}
