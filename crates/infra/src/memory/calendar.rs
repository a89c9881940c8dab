//! In-memory implementation of the CalendarGateway port.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use slotwise_core::CalendarGateway;
use slotwise_domain::{intervals_overlap, BusyInterval, Result};
use tracing::{debug, instrument};

/// Busy intervals held per user, standing in for a calendar provider
#[derive(Default)]
pub struct InMemoryCalendar {
    busy: RwLock<HashMap<String, Vec<BusyInterval>>>,
}

impl InMemoryCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `[start, end)` busy for `user_id`.
    pub fn add_busy(&self, user_id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.busy.write().entry(user_id.into()).or_default().push(BusyInterval::new(start, end));
    }

    /// Drop every busy interval of `user_id`.
    pub fn clear_user(&self, user_id: &str) {
        self.busy.write().remove(user_id);
    }
}

#[async_trait]
impl CalendarGateway for InMemoryCalendar {
    #[instrument(skip(self))]
    async fn list_busy_intervals(
        &self,
        user_id: &str,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>> {
        let busy = self.busy.read();
        let mut intervals: Vec<BusyInterval> = busy
            .get(user_id)
            .into_iter()
            .flatten()
            .filter(|i| intervals_overlap(i.start, i.end, day_start, day_end))
            .copied()
            .collect();
        intervals.sort_by_key(|i| i.start);

        debug!(count = intervals.len(), "busy intervals");
        Ok(intervals)
    }
}
