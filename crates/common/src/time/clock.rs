//! Wall-clock abstraction for testability
//!
//! Booking decisions depend on "now" (advance notice, booking creation
//! timestamps). Services take an `Arc<dyn Clock>` so tests can pin and
//! advance time without sleeping.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Trait for wall-clock reads
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the UNIX epoch
    fn millis_since_epoch(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Real system clock implementation
///
/// # Examples
///
/// ```
/// use slotwise_common::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// assert!(clock.millis_since_epoch() > 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Implement Clock for Arc<T> where T: Clock for convenient cloning
impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Mock clock for deterministic testing
///
/// Clones share the same underlying instant, so a clock handed to a
/// service can still be advanced from the test body.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use slotwise_common::time::{Clock, MockClock};
///
/// let clock = MockClock::at_epoch_secs(0);
/// let shared = clock.clone();
/// clock.advance(Duration::seconds(10));
/// assert_eq!(shared.now().timestamp(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a mock clock frozen at `start`
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { current: Arc::new(Mutex::new(start)) }
    }

    /// Create a mock clock frozen at a UNIX timestamp (seconds)
    ///
    /// Out-of-range timestamps fall back to the epoch.
    #[must_use]
    pub fn at_epoch_secs(secs: i64) -> Self {
        Self::new(DateTime::from_timestamp(secs, 0).unwrap_or_default())
    }

    /// Advance the mock clock by a duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock();
        *current += duration;
    }

    /// Set the mock clock to an absolute instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock() = instant;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}
