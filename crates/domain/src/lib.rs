//! # Slotwise Domain
//!
//! Business domain types and models for the Slotwise scheduling engine.
//!
//! This crate contains:
//! - Scheduling data types (working windows, holidays, bookings, links, slots)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - Depends only on `slotwise-common` (error classification)
//! - Pure domain models and data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::time_of_day::{format_hhmm, parse_hhmm};
