//! In-memory adapters for every scheduling port
//!
//! Reference implementations for embedding, demos and end-to-end tests.
//! State lives behind `parking_lot` locks; no call ever fails for
//! connectivity reasons.

pub mod bookings;
pub mod calendar;
pub mod links;
pub mod schedule;

use std::sync::Arc;

use slotwise_common::time::Clock;
use slotwise_core::SchedulingPorts;

pub use bookings::InMemoryBookingStore;
pub use calendar::InMemoryCalendar;
pub use links::{InMemoryAssignmentRules, InMemoryBookingLinks};
pub use schedule::{InMemoryHolidays, InMemoryWorkingHours};

/// One shared set of in-memory stores
#[derive(Clone)]
pub struct InMemoryScheduling {
    pub calendar: Arc<InMemoryCalendar>,
    pub working_hours: Arc<InMemoryWorkingHours>,
    pub holidays: Arc<InMemoryHolidays>,
    pub bookings: Arc<InMemoryBookingStore>,
    pub links: Arc<InMemoryBookingLinks>,
    pub rules: Arc<InMemoryAssignmentRules>,
}

impl InMemoryScheduling {
    /// Empty stores; bookings are stamped by `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            calendar: Arc::new(InMemoryCalendar::new()),
            working_hours: Arc::new(InMemoryWorkingHours::new()),
            holidays: Arc::new(InMemoryHolidays::new()),
            bookings: Arc::new(InMemoryBookingStore::new(clock)),
            links: Arc::new(InMemoryBookingLinks::new()),
            rules: Arc::new(InMemoryAssignmentRules::new()),
        }
    }

    /// Port handles sharing these stores.
    pub fn ports(&self) -> SchedulingPorts {
        SchedulingPorts {
            calendar: self.calendar.clone(),
            working_hours: self.working_hours.clone(),
            holidays: self.holidays.clone(),
            bookings: self.bookings.clone(),
            links: self.links.clone(),
            rules: self.rules.clone(),
        }
    }
}
