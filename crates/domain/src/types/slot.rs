//! Computed bookable windows

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A proposed bookable time window of fixed duration
///
/// Slots are ephemeral: computed per request and never persisted. A slot
/// list is a snapshot, and the assignee attached at merge time is only
/// provisional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user: Option<String>,
}

impl Slot {
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end, assigned_user: None }
    }

    #[must_use]
    pub fn with_assignee(mut self, user_id: impl Into<String>) -> Self {
        self.assigned_user = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
