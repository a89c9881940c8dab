//! Booking links, their members and assignment policy

use serde::{Deserialize, Serialize};

/// Member role on a booking link
///
/// Only used to pick the default host when every member must attend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Viewer,
}

crate::impl_domain_status_conversions!(MemberRole {
    Owner => "owner",
    Viewer => "viewer",
});

/// Whether a booking needs every member free or just one of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingCondition {
    All,
    Any,
}

crate::impl_domain_status_conversions!(BookingCondition {
    All => "all",
    Any => "any",
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLinkMember {
    pub booking_link_id: String,
    pub user_id: String,
    pub role: MemberRole,
}

/// Scheduling policy attached to a booking link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPolicy {
    pub duration_minutes: u32,
    /// Accepted for forward compatibility; slot spacing ignores it.
    pub buffer_minutes: u32,
    pub advance_notice_minutes: u32,
    pub booking_condition: BookingCondition,
    /// Authoritative switch for "any one member" semantics.
    pub round_robin_enabled: bool,
}

impl BookingPolicy {
    /// The condition the engine actually applies.
    ///
    /// `round_robin_enabled` wins over `booking_condition`; the two are
    /// stored independently and callers may set them inconsistently.
    #[must_use]
    pub const fn effective_condition(&self) -> BookingCondition {
        if self.round_robin_enabled {
            BookingCondition::Any
        } else {
            BookingCondition::All
        }
    }

    /// True when `booking_condition` agrees with `round_robin_enabled`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.booking_condition == self.effective_condition()
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            duration_minutes: 60,
            buffer_minutes: 0,
            advance_notice_minutes: 0,
            booking_condition: BookingCondition::All,
            round_robin_enabled: false,
        }
    }
}

/// A public booking page with its owner and staff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLink {
    pub id: String,
    /// Creator of the link; host of last resort.
    pub owner_id: String,
    pub policy: BookingPolicy,
    /// Ordered; list order breaks round-robin ties.
    #[serde(default)]
    pub members: Vec<BookingLinkMember>,
}

impl BookingLink {
    #[must_use]
    pub fn has_members(&self) -> bool {
        !self.members.is_empty()
    }

    /// Host used when every member is free: the first `Owner` member,
    /// falling back to the link's owner.
    #[must_use]
    pub fn default_host(&self) -> &str {
        self.members
            .iter()
            .find(|m| m.role == MemberRole::Owner)
            .map_or(self.owner_id.as_str(), |m| m.user_id.as_str())
    }
}

/// Priority-ordered fallback staffing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRule {
    pub user_id: String,
    /// Lower values are tried first.
    pub priority: i32,
    pub is_active: bool,
}
