//! Single-user availability: slot generation, free/busy checks and staff
//! day status.

pub mod checker;
pub mod ports;
pub mod slot_generator;
pub mod staff;
pub mod zone;

pub use checker::AvailabilityChecker;
pub use slot_generator::SlotGenerator;
pub use staff::StaffDirectory;
pub use zone::OrgTimezone;
