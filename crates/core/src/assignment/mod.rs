//! Multi-member assignment: host resolution, slot merging and booking
//! validation for booking links.

pub mod merger;
pub mod ports;
pub mod priority;
pub mod resolver;
pub mod service;

pub use merger::SlotMerger;
pub use priority::PriorityAssigner;
pub use resolver::AssignmentResolver;
pub use service::BookingService;
