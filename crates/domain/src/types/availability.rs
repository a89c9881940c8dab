//! Outcomes reported by availability and assignment checks
//!
//! These are business results, not errors: "nobody can take this booking"
//! is a normal answer the guest-facing layer renders as "no slots".

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a user cannot take `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnavailableReason {
    /// A non-cancelled booking overlaps the window.
    BookingConflict { booking_id: String },
    /// The window falls on one of the user's holidays.
    Holiday { reason: Option<String> },
}

/// Per-user line of a multi-user availability report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAvailability {
    pub user_id: String,
    pub reason: Option<UnavailableReason>,
}

impl UserAvailability {
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.reason.is_none()
    }
}

/// Commit-time verdict for a guest's requested start time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum BookingDecision {
    /// Book `[start, end)` with `user_id` as host.
    Assigned { user_id: String, start: DateTime<Utc>, end: DateTime<Utc> },
    /// The start is inside the link's advance-notice window.
    TooSoon { earliest: DateTime<Utc> },
    /// No member can take the slot any more.
    NoAvailableStaff,
}

/// A staff member's status for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StaffDayStatus {
    Working { start: NaiveTime, end: NaiveTime },
    NonWorkingDay,
    OnHoliday { reason: Option<String> },
}

/// Non-cancelled bookings hosted by one user in a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffBookingCount {
    pub user_id: String,
    pub booking_count: u64,
}
