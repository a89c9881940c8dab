//! Scheduling data types
//!
//! Everything here is either supplied by an external store for the
//! duration of one computation or produced by the engine and discarded
//! after the response. Nothing is persisted by the core.

pub mod availability;
pub mod booking;
pub mod link;
pub mod schedule;
pub mod slot;

pub use availability::{
    BookingDecision, StaffBookingCount, StaffDayStatus, UnavailableReason, UserAvailability,
};
pub use booking::{BookingStatus, ExistingBooking};
pub use link::{
    AssignmentRule, BookingCondition, BookingLink, BookingLinkMember, BookingPolicy, MemberRole,
};
pub use schedule::{day_of_week_index, intervals_overlap, BusyInterval, Holiday, WorkingWindow};
pub use slot::Slot;
