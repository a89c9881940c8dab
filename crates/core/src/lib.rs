//! # Slotwise Core
//!
//! Pure scheduling logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the calendar provider and the stores
//! - Slot generation and availability checks
//! - Round-robin assignment and multi-member slot merging
//! - The booking-link facade used by request handlers
//!
//! ## Architecture Principles
//! - Only depends on `slotwise-common` and `slotwise-domain`
//! - No database, HTTP, or provider code
//! - All external dependencies via traits
//! - Stateless: every answer is recomputed from the ports

pub mod assignment;
pub mod availability;
pub mod engine;

pub use assignment::ports::{AssignmentRuleStore, BookingLinkStore};
pub use assignment::{AssignmentResolver, BookingService, PriorityAssigner, SlotMerger};
pub use availability::ports::{BookingStore, CalendarGateway, HolidayStore, WorkingHoursStore};
pub use availability::{AvailabilityChecker, OrgTimezone, SlotGenerator, StaffDirectory};
pub use engine::{SchedulingEngine, SchedulingPorts};
