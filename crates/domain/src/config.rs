//! Configuration management

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_UTC_OFFSET_MINUTES, DEFAULT_WORK_END, DEFAULT_WORK_START,
    MAX_UTC_OFFSET_MINUTES,
};
use crate::errors::{Result, SchedulingError};
use crate::utils::time_of_day::parse_hhmm;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scheduling policy shared by every request in the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Organisation timezone as a fixed offset from UTC, in minutes.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    /// Start of the fallback working window, `"HH:MM"`.
    #[serde(default = "default_work_start")]
    pub default_work_start: String,
    /// End of the fallback working window, `"HH:MM"`.
    #[serde(default = "default_work_end")]
    pub default_work_end: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_utc_offset_minutes() -> i32 {
    DEFAULT_UTC_OFFSET_MINUTES
}

fn default_work_start() -> String {
    DEFAULT_WORK_START.to_string()
}

fn default_work_end() -> String {
    DEFAULT_WORK_END.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
            default_work_start: default_work_start(),
            default_work_end: default_work_end(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

impl SchedulingConfig {
    /// Parsed fallback working window `(start, end)`.
    ///
    /// # Errors
    /// Returns `SchedulingError::Config` if either bound is malformed or the
    /// window is empty.
    pub fn default_working_hours(&self) -> Result<(NaiveTime, NaiveTime)> {
        let start = parse_hhmm(&self.default_work_start)
            .map_err(|e| SchedulingError::Config(format!("default_work_start: {e}")))?;
        let end = parse_hhmm(&self.default_work_end)
            .map_err(|e| SchedulingError::Config(format!("default_work_end: {e}")))?;

        if start >= end {
            return Err(SchedulingError::Config(format!(
                "Default working window {} - {} is empty",
                self.default_work_start, self.default_work_end
            )));
        }

        Ok((start, end))
    }

    /// Check the offset range and the fallback working window.
    ///
    /// # Errors
    /// Returns `SchedulingError::Config` for an offset beyond
    /// ±`MAX_UTC_OFFSET_MINUTES` or an invalid fallback window.
    pub fn validate(&self) -> Result<()> {
        let offset = self.utc_offset_minutes;
        if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&offset) {
            return Err(SchedulingError::Config(format!(
                "utc_offset_minutes must be within ±{MAX_UTC_OFFSET_MINUTES}, got {offset}"
            )));
        }

        self.default_working_hours()?;
        Ok(())
    }
}

impl Config {
    /// Check cross-field constraints after loading.
    ///
    /// # Errors
    /// Returns `SchedulingError::Config` for an out-of-range offset or an
    /// invalid fallback working window.
    pub fn validate(&self) -> Result<()> {
        self.scheduling.validate()?;

        if self.logging.level.trim().is_empty() {
            return Err(SchedulingError::Config("logging.level must not be empty".to_string()));
        }

        Ok(())
    }
}
