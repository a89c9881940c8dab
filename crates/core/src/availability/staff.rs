//! Staff directory - per-day status and monthly booking load

use std::sync::Arc;

use chrono::NaiveDate;
use slotwise_domain::{day_of_week_index, Result, StaffBookingCount, StaffDayStatus};

use super::ports::{BookingStore, HolidayStore, WorkingHoursStore};
use super::zone::OrgTimezone;

/// Read-only view of staff schedules for dashboards and manual booking
pub struct StaffDirectory {
    working_hours: Arc<dyn WorkingHoursStore>,
    holidays: Arc<dyn HolidayStore>,
    bookings: Arc<dyn BookingStore>,
    zone: OrgTimezone,
}

impl StaffDirectory {
    pub fn new(
        working_hours: Arc<dyn WorkingHoursStore>,
        holidays: Arc<dyn HolidayStore>,
        bookings: Arc<dyn BookingStore>,
        zone: OrgTimezone,
    ) -> Self {
        Self { working_hours, holidays, bookings, zone }
    }

    /// Status of `user_id` on `date`.
    ///
    /// Unlike slot generation there is no 09:00–18:00 fallback: a weekday
    /// without an available window is reported as a non-working day.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn day_status(&self, user_id: &str, date: NaiveDate) -> Result<StaffDayStatus> {
        let window = self.working_hours.get_working_window(user_id, day_of_week_index(date)).await?;

        let Some(window) = window.filter(|w| w.is_available) else {
            return Ok(StaffDayStatus::NonWorkingDay);
        };

        if let Some(holiday) = self.holidays.find_holiday(user_id, date).await? {
            return Ok(StaffDayStatus::OnHoliday { reason: holiday.reason });
        }

        Ok(StaffDayStatus::Working { start: window.start_time, end: window.end_time })
    }

    /// Non-cancelled bookings hosted by `user_id` in the local month of
    /// `month`.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn monthly_booking_count(&self, user_id: &str, month: NaiveDate) -> Result<u64> {
        let (start, end) = self.zone.month_bounds(month)?;
        self.bookings.count_active(user_id, start, end).await
    }

    /// Booking counts for every host in the local month of `month`,
    /// busiest first, ties by user id.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn monthly_booking_stats(&self, month: NaiveDate) -> Result<Vec<StaffBookingCount>> {
        let (start, end) = self.zone.month_bounds(month)?;
        let mut stats = self.bookings.active_counts_by_user(start, end).await?;
        stats.sort_by(|a, b| {
            b.booking_count.cmp(&a.booking_count).then_with(|| a.user_id.cmp(&b.user_id))
        });
        Ok(stats)
    }
}
