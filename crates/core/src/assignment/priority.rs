//! Priority assigner - rule-based host selection
//!
//! An alternative to round-robin driven by organisation-wide rules: users
//! are tried in ascending `priority` and the first one whose generated
//! slots include the requested start hosts the booking.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use slotwise_domain::{Result, SchedulingError};
use tracing::debug;

use super::ports::{AssignmentRuleStore, BookingLinkStore};
use crate::availability::SlotGenerator;

pub struct PriorityAssigner {
    links: Arc<dyn BookingLinkStore>,
    rules: Arc<dyn AssignmentRuleStore>,
    generator: SlotGenerator,
}

impl PriorityAssigner {
    pub fn new(
        links: Arc<dyn BookingLinkStore>,
        rules: Arc<dyn AssignmentRuleStore>,
        generator: SlotGenerator,
    ) -> Self {
        Self { links, rules, generator }
    }

    /// Host for the slot starting at `start`, or `None` if no ruled user
    /// offers it. Without any active rule the link owner hosts.
    ///
    /// # Errors
    /// - `SchedulingError::NotFound` if the link does not exist
    /// - calendar and store failures, unmodified
    pub async fn assign(
        &self,
        booking_link_id: &str,
        start: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Result<Option<String>> {
        let link = self.links.find_booking_link(booking_link_id).await?.ok_or_else(|| {
            SchedulingError::NotFound(format!("Booking link not found: {booking_link_id}"))
        })?;

        let mut rules: Vec<_> =
            self.rules.list_active_rules().await?.into_iter().filter(|r| r.is_active).collect();
        if rules.is_empty() {
            return Ok(Some(link.owner_id));
        }
        rules.sort_by_key(|r| r.priority);

        // Lower-priority users are only queried once everyone ahead is busy.
        for rule in rules {
            if self.is_user_available(&rule.user_id, start, duration_minutes).await? {
                debug!(
                    booking_link_id,
                    %start,
                    user_id = %rule.user_id,
                    priority = rule.priority,
                    "Priority assignment"
                );
                return Ok(Some(rule.user_id));
            }
        }

        Ok(None)
    }

    /// Whether `user_id` offers a slot starting exactly at `start`.
    ///
    /// # Errors
    /// Propagates calendar and store failures.
    pub async fn is_user_available(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Result<bool> {
        let day = self.generator.zone().local_date(start);
        let slots = self.generator.generate_slots(user_id, day, duration_minutes, 0).await?;
        Ok(slots.iter().any(|slot| slot.start == start))
    }
}
