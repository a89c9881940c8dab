//! Port interfaces for booking links and staffing rules

use async_trait::async_trait;
use slotwise_domain::{AssignmentRule, BookingLink, Result};

/// Trait for loading booking links with their policy and members
#[async_trait]
pub trait BookingLinkStore: Send + Sync {
    /// The link with its members in stored order, or `None` if unknown.
    async fn find_booking_link(&self, booking_link_id: &str) -> Result<Option<BookingLink>>;
}

/// Trait for the organisation-wide priority rules
#[async_trait]
pub trait AssignmentRuleStore: Send + Sync {
    /// Rules with `is_active` set, in any order.
    async fn list_active_rules(&self) -> Result<Vec<AssignmentRule>>;
}
