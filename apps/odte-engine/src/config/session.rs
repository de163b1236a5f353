//! Session timing configuration.

use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Advisory timing for when the opening range has settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Local wall-clock time ("HH:MM") after which signals are considered confirmed.
    #[serde(default = "default_confirmation_time")]
    pub confirmation_time: String,
    /// UTC offset of the local wall clock, in hours.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confirmation_time: default_confirmation_time(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

impl SessionConfig {
    /// Parsed confirmation time.
    ///
    /// # Errors
    ///
    /// Returns a description if the value is not `HH:MM`.
    pub fn confirmation_time(&self) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(&self.confirmation_time, "%H:%M").map_err(|e| {
            format!(
                "confirmation_time must be HH:MM, got '{}': {e}",
                self.confirmation_time
            )
        })
    }

    /// Local UTC offset.
    ///
    /// # Errors
    ///
    /// Returns a description if the offset is outside ±14 hours.
    pub fn utc_offset(&self) -> Result<FixedOffset, String> {
        if self.utc_offset_hours.abs() > 14 {
            return Err(format!(
                "utc_offset_hours must be within ±14, got {}",
                self.utc_offset_hours
            ));
        }
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .ok_or_else(|| format!("invalid utc_offset_hours {}", self.utc_offset_hours))
    }

    /// Whether `now` is earlier than the confirmation time on the local clock.
    ///
    /// # Errors
    ///
    /// Returns a description if the time or the offset is invalid.
    pub fn before_confirmation(&self, now: DateTime<Utc>) -> Result<bool, String> {
        let local = now.with_timezone(&self.utc_offset()?);
        Ok(local.time() < self.confirmation_time()?)
    }
}

fn default_confirmation_time() -> String {
    "16:15".to_string()
}

const fn default_utc_offset_hours() -> i32 {
    2
}
