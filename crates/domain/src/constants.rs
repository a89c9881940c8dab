//! Scheduling constants
//!
//! Centralized location for the fixed policies of the slot algorithm.

/// Slots always start this many minutes apart, regardless of duration or
/// buffer.
pub const SLOT_STEP_MINUTES: i64 = 60;

/// Working hours assumed when a user has no window for the weekday.
pub const DEFAULT_WORK_START: &str = "09:00";
pub const DEFAULT_WORK_END: &str = "18:00";

/// Organisation timezone offset (UTC+9) used when nothing is configured.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 9 * 60;

/// Largest offset magnitude accepted by configuration, inclusive (UTC±18:00).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SLOTWISE_";
