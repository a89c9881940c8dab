//! Availability checker - "is user U free for `[start, end)`?"
//!
//! A user is busy when a non-cancelled booking overlaps the window or when
//! the local calendar day of `start` is one of their holidays. The external
//! calendar is not consulted here; that is the slot generator's job.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use slotwise_domain::{BookingStatus, Result, UnavailableReason, UserAvailability};
use tracing::debug;

use super::ports::{BookingStore, HolidayStore};
use super::zone::OrgTimezone;

/// Pure free/busy predicate over the booking and holiday stores
#[derive(Clone)]
pub struct AvailabilityChecker {
    bookings: Arc<dyn BookingStore>,
    holidays: Arc<dyn HolidayStore>,
    zone: OrgTimezone,
}

impl AvailabilityChecker {
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        holidays: Arc<dyn HolidayStore>,
        zone: OrgTimezone,
    ) -> Self {
        Self { bookings, holidays, zone }
    }

    /// Whether `user_id` can take `[start, end)`.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn is_available(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool> {
        Ok(self.unavailability_reason(user_id, start, end).await?.is_none())
    }

    /// First reason `user_id` cannot take `[start, end)`, or `None` if free.
    ///
    /// Booking conflicts are reported before holidays.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn unavailability_reason(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<UnavailableReason>> {
        let overlapping = self
            .bookings
            .find_overlapping(user_id, start, end, &[BookingStatus::Cancelled])
            .await?;

        // Stores are trusted for the query, but the overlap rule is ours.
        if let Some(conflict) =
            overlapping.into_iter().find(|b| b.is_active() && b.overlaps(start, end))
        {
            debug!(user_id, booking_id = %conflict.id, "Booking conflict");
            return Ok(Some(UnavailableReason::BookingConflict { booking_id: conflict.id }));
        }

        let day = self.zone.local_date(start);
        if let Some(holiday) = self.holidays.find_holiday(user_id, day).await? {
            debug!(user_id, %day, "Holiday conflict");
            return Ok(Some(UnavailableReason::Holiday { reason: holiday.reason }));
        }

        Ok(None)
    }

    /// Availability of several users for the same window, in input order.
    ///
    /// Used when staff book on behalf of a guest with an explicit host list:
    /// every blocked host is reported together with the cause.
    ///
    /// # Errors
    /// Fails on the first store failure.
    pub async fn check_users(
        &self,
        user_ids: &[String],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<UserAvailability>> {
        let reasons = try_join_all(
            user_ids.iter().map(|user_id| self.unavailability_reason(user_id, start, end)),
        )
        .await?;

        Ok(user_ids
            .iter()
            .zip(reasons)
            .map(|(user_id, reason)| UserAvailability { user_id: user_id.clone(), reason })
            .collect())
    }
}
