//! Finnhub economic calendar adapter implementing `EventCalendarPort`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::application::ports::{EventCalendarError, EventCalendarPort};
use crate::infrastructure::calendar::EventFilter;
use crate::infrastructure::rest::{RestClient, RestError, RetryConfig};

use super::api_types::EconomicCalendarResponse;

/// Default Finnhub API host.
pub const DEFAULT_FINNHUB_BASE_URL: &str = "https://finnhub.io";

/// Finnhub adapter configuration.
#[derive(Debug, Clone)]
pub struct FinnhubConfig {
    /// API base URL.
    pub base_url: String,
    /// API token. Empty disables the lookup.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry configuration.
    pub retry: RetryConfig,
    /// Which entries block a session.
    pub filter: EventFilter,
}

impl Default for FinnhubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FINNHUB_BASE_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
            retry: RetryConfig::default(),
            filter: EventFilter::default(),
        }
    }
}

/// Economic calendar lookup against Finnhub.
#[derive(Debug, Clone)]
pub struct FinnhubCalendarAdapter {
    client: RestClient,
    api_key: String,
    filter: EventFilter,
}

impl FinnhubCalendarAdapter {
    /// Create a new Finnhub adapter.
    ///
    /// # Errors
    ///
    /// Returns `EventCalendarError::Network` if the HTTP client cannot be built.
    pub fn new(config: &FinnhubConfig) -> Result<Self, EventCalendarError> {
        let client = RestClient::new(&config.base_url, config.timeout, config.retry.clone())
            .map_err(|e| EventCalendarError::Network(e.to_string()))?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            filter: config.filter.clone(),
        })
    }
}

#[async_trait]
impl EventCalendarPort for FinnhubCalendarAdapter {
    async fn high_impact_events(&self, date: NaiveDate) -> Result<Vec<String>, EventCalendarError> {
        if self.api_key.is_empty() {
            tracing::warn!("No calendar API key configured, skipping event lookup");
            return Ok(Vec::new());
        }

        let day = date.format("%Y-%m-%d").to_string();
        let response: EconomicCalendarResponse = self
            .client
            .get_json(
                "/api/v1/calendar/economic",
                &[
                    ("from", day.as_str()),
                    ("to", day.as_str()),
                    ("token", self.api_key.as_str()),
                ],
            )
            .await
            .map_err(EventCalendarError::from)?;

        let total = response.economic_calendar.len();
        let events: Vec<String> = response
            .economic_calendar
            .into_iter()
            .filter(|ev| self.filter.blocks(&ev.country, &ev.impact, &ev.event))
            .inspect(|ev| tracing::debug!(event = %ev.event, time = ?ev.time, "Blocking event"))
            .map(|ev| ev.event)
            .collect();

        tracing::debug!(%date, total, blocking = events.len(), "Fetched economic calendar");
        Ok(events)
    }
}

impl From<RestError> for EventCalendarError {
    fn from(err: RestError) -> Self {
        if err.is_unauthorized() {
            return Self::Unauthorized;
        }
        match err {
            RestError::Status { status, message } => Self::Api { status, message },
            RestError::JsonParse(msg) => Self::JsonParse(msg),
            RestError::Network(msg) => Self::Network(msg),
            err @ RestError::MaxRetriesExceeded { .. } => Self::Network(err.to_string()),
        }
    }
}
