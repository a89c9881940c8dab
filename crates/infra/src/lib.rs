//! # Slotwise Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - Tracing subscriber setup
//! - In-memory adapters for every scheduling port
//!
//! ## Architecture
//! - Implements traits defined in `slotwise-core`
//! - Contains all "impure" code (environment, files, global subscriber)

pub mod config;
pub mod memory;
pub mod observability;

// Re-export commonly used items
pub use memory::InMemoryScheduling;
pub use observability::init_tracing;
