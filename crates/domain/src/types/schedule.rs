//! Working hours, holidays and busy intervals

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SchedulingError};
use crate::utils::time_of_day::parse_hhmm;

/// Half-open overlap test: `[a_start, a_end)` and `[b_start, b_end)` share
/// at least one instant.
///
/// Back-to-back ranges (`a_end == b_start`) do not overlap.
#[must_use]
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Weekday index with Sunday = 0 through Saturday = 6.
#[must_use]
pub fn day_of_week_index(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always in 0..=6
    u8::try_from(date.weekday().num_days_from_sunday()).unwrap_or_default()
}

/// A user's open interval for one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    pub user_id: String,
    /// Sunday = 0 through Saturday = 6.
    pub day_of_week: u8,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

impl WorkingWindow {
    /// Build an available window from `"HH:MM"` strings.
    ///
    /// # Errors
    /// Returns `SchedulingError::InvalidInput` for a weekday outside `0..=6`,
    /// malformed times, or an end that is not after the start.
    pub fn from_hhmm(
        user_id: impl Into<String>,
        day_of_week: u8,
        start: &str,
        end: &str,
    ) -> Result<Self> {
        if day_of_week > 6 {
            return Err(SchedulingError::InvalidInput(format!(
                "day_of_week must be 0-6, got {day_of_week}"
            )));
        }

        let start_time = parse_hhmm(start)?;
        let end_time = parse_hhmm(end)?;
        if end_time <= start_time {
            return Err(SchedulingError::InvalidInput(format!(
                "Working window {start} - {end} ends before it starts"
            )));
        }

        Ok(Self { user_id: user_id.into(), day_of_week, start_time, end_time, is_available: true })
    }

    /// Mark the weekday as a day off.
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}

/// A full day on which a user takes no bookings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub user_id: String,
    pub date: NaiveDate,
    pub reason: Option<String>,
}

/// Time range reported busy by the external calendar, half-open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether `[start, end)` collides with this busy range.
    #[must_use]
    pub fn blocks(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        intervals_overlap(start, end, self.start, self.end)
    }
}
