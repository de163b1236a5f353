//! Yahoo Finance chart API response types.
//!
//! Only the fields needed for a session price are mapped.

use serde::Deserialize;

use crate::domain::market_snapshot::SessionPrice;

/// Top-level chart response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    /// Chart payload.
    pub chart: Chart,
}

/// Chart payload: either results or an error.
#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    /// Results, one per requested symbol.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// Provider error.
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// Provider-reported error.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartError {
    /// Error code, e.g. "Not Found".
    #[serde(default)]
    pub code: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

/// Per-symbol chart result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartResult {
    /// Indicator series.
    #[serde(default)]
    pub indicators: Indicators,
}

/// Indicator series container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Indicators {
    /// OHLCV quote series.
    #[serde(default)]
    pub quote: Vec<QuoteSeries>,
}

/// OHLCV series; bars without trades are `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteSeries {
    /// Bar opens.
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    /// Bar closes.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Session price from the first result: last close and first open.
    ///
    /// `None` when either series has no printed bar.
    #[must_use]
    pub fn session_price(&self) -> Option<SessionPrice> {
        let series = self
            .chart
            .result
            .as_ref()?
            .first()?
            .indicators
            .quote
            .first()?;

        let current = series.close.iter().rev().find_map(|c| *c)?;
        let open = series.open.iter().find_map(|o| *o)?;
        Some(SessionPrice::new(current, open))
    }
}
