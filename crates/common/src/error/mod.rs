//! Error classification shared by every Slotwise crate
//!
//! Each crate defines its own `thiserror` enum. This module gives them a
//! common vocabulary so callers can make retry and alerting decisions
//! without matching on crate-specific variants.
//!
//! ## ErrorClassification Trait
//!
//! - **`is_retryable()`**: may the caller try the same operation again?
//! - **`severity()`**: how loudly should this be reported?
//! - **`is_critical()`**: does this point at a broken invariant?
//! - **`retry_after()`**: suggested delay before retrying, if known
//!
//! The scheduling engine never retries on its own. Upstream failures are
//! classified as retryable and handed back to the request handler, which
//! owns the backoff policy.
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case | Examples |
//! |-------|----------|----------|
//! | **Info** | Expected conditions | Unknown booking link |
//! | **Warning** | Degraded but operational | Calendar provider timeout |
//! | **Error** | Failure requiring attention | Invalid input, bad config |
//! | **Critical** | System integrity at risk | Internal invariant violation |
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use slotwise_common::error::{ErrorClassification, ErrorSeverity};
//!
//! #[derive(Debug)]
//! enum GatewayError {
//!     Timeout,
//!     Unauthorized,
//! }
//!
//! impl ErrorClassification for GatewayError {
//!     fn is_retryable(&self) -> bool {
//!         matches!(self, Self::Timeout)
//!     }
//!
//!     fn severity(&self) -> ErrorSeverity {
//!         match self {
//!             Self::Timeout => ErrorSeverity::Warning,
//!             Self::Unauthorized => ErrorSeverity::Error,
//!         }
//!     }
//!
//!     fn is_critical(&self) -> bool {
//!         false
//!     }
//!
//!     fn retry_after(&self) -> Option<Duration> {
//!         None
//!     }
//! }
//!
//! assert!(GatewayError::Timeout.is_retryable());
//! assert_eq!(GatewayError::Unauthorized.severity(), ErrorSeverity::Error);
//! ```

use std::fmt;
use std::time::Duration;

/// Standard interface for classifying errors by their characteristics.
pub trait ErrorClassification {
    /// Check if this error is retryable
    ///
    /// Retryable errors are transient: network timeouts, rate limiting,
    /// expired upstream credentials that a refresh may fix.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    ///
    /// Used for monitoring, alerting, and logging decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool;

    /// Get the suggested retry delay if applicable
    fn retry_after(&self) -> Option<Duration>;
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
