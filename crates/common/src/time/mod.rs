//! Time utilities and abstractions
//!
//! - **[`clock`]**: wall-clock abstraction with real and mock implementations
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Duration;
//! use slotwise_common::time::{Clock, MockClock};
//!
//! let clock = MockClock::at_epoch_secs(1_717_372_800);
//! let before = clock.now();
//! clock.advance(Duration::minutes(30));
//! assert_eq!(clock.now() - before, Duration::minutes(30));
//! ```

pub mod clock;

pub use clock::{Clock, MockClock, SystemClock};
