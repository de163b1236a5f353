//! In-memory event calendar.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::application::ports::{EventCalendarError, EventCalendarPort};

/// Serves blocking events from a fixed schedule.
#[derive(Debug, Clone, Default)]
pub struct StaticEventCalendar {
    schedule: HashMap<NaiveDate, Vec<String>>,
}

impl StaticEventCalendar {
    /// Create an empty calendar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a blocking event on `date`.
    #[must_use]
    pub fn with_event(mut self, date: NaiveDate, event: impl Into<String>) -> Self {
        self.schedule.entry(date).or_default().push(event.into());
        self
    }
}

#[async_trait]
impl EventCalendarPort for StaticEventCalendar {
    async fn high_impact_events(&self, date: NaiveDate) -> Result<Vec<String>, EventCalendarError> {
        Ok(self.schedule.get(&date).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_are_scoped_to_their_date() {
        let fomc = NaiveDate::from_ymd_opt(2026, 10, 28).unwrap();
        let calendar = StaticEventCalendar::new().with_event(fomc, "FOMC Statement");

        assert_eq!(
            calendar.high_impact_events(fomc).await.unwrap(),
            vec!["FOMC Statement"]
        );
        let next = fomc.succ_opt().unwrap();
        assert!(calendar.high_impact_events(next).await.unwrap().is_empty());
    }
}
