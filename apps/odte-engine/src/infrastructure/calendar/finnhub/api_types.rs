//! Finnhub economic calendar response types.

use serde::Deserialize;

/// `GET /api/v1/calendar/economic` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EconomicCalendarResponse {
    /// Calendar entries.
    #[serde(rename = "economicCalendar", default)]
    pub economic_calendar: Vec<EconomicEvent>,
}

/// One calendar entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EconomicEvent {
    /// ISO country code.
    #[serde(default)]
    pub country: String,
    /// Event name.
    #[serde(default)]
    pub event: String,
    /// Impact level: "low", "medium" or "high".
    #[serde(default)]
    pub impact: String,
    /// Scheduled time, "YYYY-MM-DD HH:MM:SS" UTC.
    #[serde(default)]
    pub time: Option<String>,
}
