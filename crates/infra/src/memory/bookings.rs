//! In-memory implementation of the BookingStore port.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use slotwise_common::time::Clock;
use slotwise_core::BookingStore;
use slotwise_domain::{
    BookingStatus, ExistingBooking, Result, SchedulingError, StaffBookingCount,
};
use tracing::{debug, instrument};

/// Bookings kept in insertion order, stamped by the injected clock
pub struct InMemoryBookingStore {
    bookings: RwLock<Vec<ExistingBooking>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryBookingStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { bookings: RwLock::new(Vec::new()), clock }
    }

    /// Store a confirmed booking created now and return it.
    pub fn record(
        &self,
        booking_link_id: Option<&str>,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ExistingBooking {
        let mut bookings = self.bookings.write();
        let booking = ExistingBooking {
            id: format!("bk-{}", bookings.len() + 1),
            booking_link_id: booking_link_id.map(str::to_string),
            user_id: user_id.to_string(),
            start_time: start,
            end_time: end,
            status: BookingStatus::Confirmed,
            created_at: self.clock.now(),
        };
        bookings.push(booking.clone());
        debug!(booking_id = %booking.id, user_id, "booking recorded");
        booking
    }

    /// Store an externally built booking as is.
    pub fn insert(&self, booking: ExistingBooking) {
        self.bookings.write().push(booking);
    }

    /// # Errors
    /// Returns `SchedulingError::NotFound` for an unknown booking id.
    pub fn set_status(&self, booking_id: &str, status: BookingStatus) -> Result<()> {
        let mut bookings = self.bookings.write();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| SchedulingError::NotFound(format!("Booking not found: {booking_id}")))?;
        booking.status = status;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bookings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.read().is_empty()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    #[instrument(skip(self))]
    async fn find_overlapping(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: &[BookingStatus],
    ) -> Result<Vec<ExistingBooking>> {
        Ok(self
            .bookings
            .read()
            .iter()
            .filter(|b| b.user_id == user_id && !exclude.contains(&b.status))
            .filter(|b| b.overlaps(start, end))
            .cloned()
            .collect())
    }

    async fn find_last_assigned(
        &self,
        booking_link_id: &str,
        user_id: &str,
    ) -> Result<Option<ExistingBooking>> {
        Ok(self
            .bookings
            .read()
            .iter()
            .filter(|b| b.user_id == user_id && b.is_active())
            .filter(|b| b.booking_link_id.as_deref() == Some(booking_link_id))
            .max_by_key(|b| b.created_at)
            .cloned())
    }

    async fn count_active(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64> {
        let count = self
            .bookings
            .read()
            .iter()
            .filter(|b| b.user_id == user_id && b.is_active())
            .filter(|b| b.start_time >= start && b.start_time < end)
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn active_counts_by_user(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StaffBookingCount>> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for booking in self.bookings.read().iter() {
            if booking.is_active() && booking.start_time >= start && booking.start_time < end {
                *counts.entry(booking.user_id.clone()).or_default() += 1;
            }
        }

        Ok(counts
            .into_iter()
            .map(|(user_id, booking_count)| StaffBookingCount { user_id, booking_count })
            .collect())
    }
}
