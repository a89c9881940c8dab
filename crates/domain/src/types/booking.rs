//! Reservations as seen by the availability checks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::schedule::intervals_overlap;

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Completed,
}

crate::impl_domain_status_conversions!(BookingStatus {
    Confirmed => "confirmed",
    Cancelled => "cancelled",
    Completed => "completed",
});

impl BookingStatus {
    /// Cancelled bookings free their time again; everything else holds it.
    #[must_use]
    pub const fn occupies_time(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// Subset of a stored booking needed for overlap and fairness checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingBooking {
    pub id: String,
    /// `None` for bookings created manually by staff.
    pub booking_link_id: Option<String>,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl ExistingBooking {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.occupies_time()
    }

    /// Half-open overlap with `[start, end)`, ignoring status.
    #[must_use]
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        intervals_overlap(self.start_time, self.end_time, start, end)
    }
}
