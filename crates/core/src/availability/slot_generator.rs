//! Slot generator - bookable windows for one staff member on one day
//!
//! # Algorithm
//! 1. Resolve the working window for the weekday (fallback 09:00–18:00).
//!    A window marked unavailable yields no slots.
//! 2. A holiday on the day yields no slots, whatever the working hours.
//! 3. Fetch busy intervals for the whole local day from the calendar.
//! 4. Start at the window start rounded up to the next whole hour.
//! 5. Step one hour at a time; emit `[cursor, cursor + duration)` unless it
//!    runs past the window end (stop) or overlaps a busy interval (skip).
//!
//! Slots always start on the hour. `buffer_minutes` is accepted but does
//! not change spacing: consecutive slots are exactly one hour apart.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime};
use slotwise_domain::constants::SLOT_STEP_MINUTES;
use slotwise_domain::{
    day_of_week_index, parse_hhmm, Result, SchedulingConfig, SchedulingError, Slot,
};
use tracing::debug;

use super::ports::{CalendarGateway, HolidayStore, WorkingHoursStore};
use super::zone::OrgTimezone;

/// Computes the bookable slots of a single user
#[derive(Clone)]
pub struct SlotGenerator {
    calendar: Arc<dyn CalendarGateway>,
    working_hours: Arc<dyn WorkingHoursStore>,
    holidays: Arc<dyn HolidayStore>,
    zone: OrgTimezone,
    default_start: NaiveTime,
    default_end: NaiveTime,
}

impl SlotGenerator {
    /// Create a generator with the default fallback window
    ///
    /// # Errors
    /// Returns `SchedulingError::Config` if the built-in window constants
    /// do not parse.
    pub fn new(
        calendar: Arc<dyn CalendarGateway>,
        working_hours: Arc<dyn WorkingHoursStore>,
        holidays: Arc<dyn HolidayStore>,
        zone: OrgTimezone,
    ) -> Result<Self> {
        let (default_start, default_end) = SchedulingConfig::default().default_working_hours()?;
        Ok(Self { calendar, working_hours, holidays, zone, default_start, default_end })
    }

    /// Use the fallback window from configuration
    ///
    /// # Errors
    /// Returns `SchedulingError::Config` if the configured window is invalid.
    pub fn with_config(mut self, config: &SchedulingConfig) -> Result<Self> {
        let (start, end) = config.default_working_hours()?;
        self.default_start = start;
        self.default_end = end;
        Ok(self)
    }

    /// Override the fallback window with `"HH:MM"` bounds
    ///
    /// # Errors
    /// Returns `SchedulingError::InvalidInput` for malformed times.
    pub fn with_default_window(mut self, start: &str, end: &str) -> Result<Self> {
        self.default_start = parse_hhmm(start)?;
        self.default_end = parse_hhmm(end)?;
        Ok(self)
    }

    pub const fn zone(&self) -> &OrgTimezone {
        &self.zone
    }

    /// Bookable slots for `user_id` on local `day`, in chronological order.
    ///
    /// Every call recomputes from the ports; nothing is cached.
    ///
    /// # Errors
    /// - `SchedulingError::InvalidInput` if `duration_minutes` is zero
    /// - any error returned by the calendar or the stores, unmodified
    pub async fn generate_slots(
        &self,
        user_id: &str,
        day: NaiveDate,
        duration_minutes: u32,
        buffer_minutes: u32,
    ) -> Result<Vec<Slot>> {
        if duration_minutes == 0 {
            return Err(SchedulingError::InvalidInput(
                "Slot duration must be at least one minute".to_string(),
            ));
        }

        let day_of_week = day_of_week_index(day);
        let (start_time, end_time) =
            match self.working_hours.get_working_window(user_id, day_of_week).await? {
                Some(window) if !window.is_available => {
                    debug!(user_id, %day, "Weekday marked unavailable");
                    return Ok(Vec::new());
                }
                Some(window) => (window.start_time, window.end_time),
                None => (self.default_start, self.default_end),
            };

        if self.holidays.has_holiday(user_id, day).await? {
            debug!(user_id, %day, "Holiday, no slots");
            return Ok(Vec::new());
        }

        let (day_start, day_end) = self.zone.day_bounds(day);
        let busy = self.calendar.list_busy_intervals(user_id, day_start, day_end).await?;

        let work_start = self.zone.instant(day, start_time);
        let work_end = self.zone.instant(day, end_time);
        let length = Duration::minutes(i64::from(duration_minutes));
        let step = Duration::minutes(SLOT_STEP_MINUTES);

        let mut slots = Vec::new();
        let mut cursor = self.zone.ceil_to_hour(work_start);

        while cursor < work_end {
            let slot_end = cursor + length;
            if slot_end > work_end {
                break;
            }

            if !busy.iter().any(|interval| interval.blocks(cursor, slot_end)) {
                slots.push(Slot::new(cursor, slot_end));
            }

            cursor += step;
        }

        debug!(
            user_id,
            %day,
            duration_minutes,
            buffer_minutes,
            busy_intervals = busy.len(),
            slots = slots.len(),
            "Generated slots"
        );

        Ok(slots)
    }
}
