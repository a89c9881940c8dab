//! Error types used throughout the scheduling engine
//!
//! "Nobody is free" is not an error: the engine reports it with empty slot
//! lists, `None` assignees or an explicit decision value. Variants here are
//! reserved for missing records, upstream failures and bad input.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use slotwise_common::error::{ErrorClassification, ErrorSeverity};
use thiserror::Error;

/// Main error type for Slotwise
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SchedulingError {
    /// Booking link, user or schedule record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The external calendar provider failed (network, auth expiry, quota).
    #[error("Calendar error: {0}")]
    Calendar(String),

    /// A booking, holiday, working-hours or link store call failed.
    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SchedulingError {
    /// True when the failure came from a collaborator rather than from the
    /// engine or its caller.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Calendar(_) | Self::Store(_))
    }

    /// Stable label suitable for log fields.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Calendar(_) => "calendar",
            Self::Store(_) => "store",
            Self::InvalidInput(_) => "invalid_input",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

impl ErrorClassification for SchedulingError {
    fn is_retryable(&self) -> bool {
        self.is_upstream()
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Info,
            Self::Calendar(_) | Self::Store(_) => ErrorSeverity::Warning,
            Self::InvalidInput(_) | Self::Config(_) => ErrorSeverity::Error,
            Self::Internal(_) => ErrorSeverity::Critical,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

/// Result type alias for Slotwise operations
pub type Result<T> = std::result::Result<T, SchedulingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_errors_are_retryable() {
        assert!(SchedulingError::Calendar("token expired".into()).is_retryable());
        assert!(SchedulingError::Store("connection reset".into()).is_retryable());
        assert!(!SchedulingError::NotFound("link".into()).is_retryable());
        assert!(!SchedulingError::InvalidInput("duration".into()).is_retryable());
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(SchedulingError::NotFound("x".into()).severity(), ErrorSeverity::Info);
        assert_eq!(SchedulingError::Calendar("x".into()).severity(), ErrorSeverity::Warning);
        assert_eq!(SchedulingError::Config("x".into()).severity(), ErrorSeverity::Error);
        assert!(SchedulingError::Internal("x".into()).is_critical());
    }

    #[test]
    fn test_display_and_serde_shape() {
        let err = SchedulingError::NotFound("booking link bl-1".into());
        assert_eq!(err.to_string(), "Not found: booking link bl-1");

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "booking link bl-1");
    }
}
