//! `"HH:MM"` time-of-day strings
//!
//! Working hours are entered and stored as zero-padded 24h strings. Seconds
//! are not part of the format.

use chrono::{NaiveTime, Timelike};

use crate::errors::{Result, SchedulingError};

/// Parse a `"HH:MM"` string into a [`NaiveTime`].
///
/// # Errors
/// Returns `SchedulingError::InvalidInput` when the string is not two
/// colon-separated numbers forming a valid time of day.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime> {
    let invalid = || SchedulingError::InvalidInput(format!("Invalid time of day '{value}', expected HH:MM"));

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || minutes.len() != 2 {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// Render a [`NaiveTime`] as `"HH:MM"`.
#[must_use]
pub fn format_hhmm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
