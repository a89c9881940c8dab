//! In-memory booking links and assignment rules.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use slotwise_core::{AssignmentRuleStore, BookingLinkStore};
use slotwise_domain::{AssignmentRule, BookingLink, BookingLinkMember, Result, SchedulingError};

#[derive(Default)]
pub struct InMemoryBookingLinks {
    links: RwLock<HashMap<String, BookingLink>>,
}

impl InMemoryBookingLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, link: BookingLink) {
        self.links.write().insert(link.id.clone(), link);
    }

    /// Append a member; list order is preserved.
    ///
    /// # Errors
    /// Returns `SchedulingError::NotFound` for an unknown link and
    /// `SchedulingError::InvalidInput` if the user is already a member.
    pub fn add_member(&self, member: BookingLinkMember) -> Result<()> {
        let mut links = self.links.write();
        let link = links.get_mut(&member.booking_link_id).ok_or_else(|| {
            SchedulingError::NotFound(format!("Booking link not found: {}", member.booking_link_id))
        })?;

        if link.members.iter().any(|m| m.user_id == member.user_id) {
            return Err(SchedulingError::InvalidInput(format!(
                "{} is already a member of {}",
                member.user_id, member.booking_link_id
            )));
        }

        link.members.push(member);
        Ok(())
    }
}

#[async_trait]
impl BookingLinkStore for InMemoryBookingLinks {
    async fn find_booking_link(&self, booking_link_id: &str) -> Result<Option<BookingLink>> {
        Ok(self.links.read().get(booking_link_id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryAssignmentRules {
    rules: RwLock<Vec<AssignmentRule>>,
}

impl InMemoryAssignmentRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, rule: AssignmentRule) {
        self.rules.write().push(rule);
    }
}

#[async_trait]
impl AssignmentRuleStore for InMemoryAssignmentRules {
    async fn list_active_rules(&self) -> Result<Vec<AssignmentRule>> {
        let mut rules: Vec<AssignmentRule> =
            self.rules.read().iter().filter(|r| r.is_active).cloned().collect();
        rules.sort_by_key(|r| r.priority);
        Ok(rules)
    }
}
