//! Port interfaces for availability data
//!
//! These traits define the boundaries between core scheduling logic and
//! the stores and calendar provider owned by the surrounding application.
//! Implementations enforce their own timeouts; failures are propagated to
//! the caller untouched.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use slotwise_domain::{
    BookingStatus, BusyInterval, ExistingBooking, Holiday, Result, StaffBookingCount,
    WorkingWindow,
};

/// Trait for reading busy time from the external calendar provider
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// All busy intervals overlapping `[day_start, day_end)`.
    ///
    /// Auth and connectivity failures must surface as errors, never as an
    /// empty list.
    async fn list_busy_intervals(
        &self,
        user_id: &str,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>>;
}

/// Trait for per-user weekly working hours
#[async_trait]
pub trait WorkingHoursStore: Send + Sync {
    /// The window for `day_of_week` (Sunday = 0), or `None` if unset.
    async fn get_working_window(
        &self,
        user_id: &str,
        day_of_week: u8,
    ) -> Result<Option<WorkingWindow>>;
}

/// Trait for per-user holidays
#[async_trait]
pub trait HolidayStore: Send + Sync {
    /// The holiday recorded for `date`, if any.
    async fn find_holiday(&self, user_id: &str, date: NaiveDate) -> Result<Option<Holiday>>;

    /// Whether `date` is a holiday for the user.
    async fn has_holiday(&self, user_id: &str, date: NaiveDate) -> Result<bool> {
        Ok(self.find_holiday(user_id, date).await?.is_some())
    }
}

/// Trait for querying reservations
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Bookings of `user_id` overlapping `[start, end)` whose status is not
    /// in `exclude`.
    async fn find_overlapping(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: &[BookingStatus],
    ) -> Result<Vec<ExistingBooking>>;

    /// Most recently created non-cancelled booking of `user_id` on the link.
    async fn find_last_assigned(
        &self,
        booking_link_id: &str,
        user_id: &str,
    ) -> Result<Option<ExistingBooking>>;

    /// Non-cancelled bookings of `user_id` starting within `[start, end)`.
    async fn count_active(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64>;

    /// Non-cancelled bookings starting within `[start, end)`, grouped by host.
    async fn active_counts_by_user(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StaffBookingCount>>;
}
