//! Slot merger - the guest-facing slot list of a booking link
//!
//! Round-robin links offer the union of their members' free slots, each
//! tagged with the member the resolver would pick right now. Other links
//! show the owner's calendar only.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use futures::future::try_join_all;
use slotwise_domain::{BookingLink, Result, SchedulingError, Slot};
use tracing::debug;

use super::ports::BookingLinkStore;
use super::resolver::AssignmentResolver;
use crate::availability::SlotGenerator;

/// Builds the merged slot list of a booking link
#[derive(Clone)]
pub struct SlotMerger {
    links: Arc<dyn BookingLinkStore>,
    generator: SlotGenerator,
    resolver: AssignmentResolver,
}

impl SlotMerger {
    pub fn new(
        links: Arc<dyn BookingLinkStore>,
        generator: SlotGenerator,
        resolver: AssignmentResolver,
    ) -> Self {
        Self { links, generator, resolver }
    }

    /// Slots offered by the link on local `day`, ascending by start.
    ///
    /// # Errors
    /// - `SchedulingError::NotFound` if the link does not exist
    /// - calendar and store failures, unmodified
    pub async fn merge_slots(
        &self,
        booking_link_id: &str,
        day: NaiveDate,
        duration_minutes: u32,
        buffer_minutes: u32,
    ) -> Result<Vec<Slot>> {
        let link = self.links.find_booking_link(booking_link_id).await?.ok_or_else(|| {
            SchedulingError::NotFound(format!("Booking link not found: {booking_link_id}"))
        })?;

        self.merge_for_link(&link, day, duration_minutes, buffer_minutes).await
    }

    /// Same as [`Self::merge_slots`] for an already loaded link.
    ///
    /// # Errors
    /// Propagates calendar and store failures.
    pub async fn merge_for_link(
        &self,
        link: &BookingLink,
        day: NaiveDate,
        duration_minutes: u32,
        buffer_minutes: u32,
    ) -> Result<Vec<Slot>> {
        if !link.policy.round_robin_enabled || !link.has_members() {
            return self
                .generator
                .generate_slots(&link.owner_id, day, duration_minutes, buffer_minutes)
                .await;
        }

        let per_member = try_join_all(link.members.iter().map(|m| {
            self.generator.generate_slots(&m.user_id, day, duration_minutes, buffer_minutes)
        }))
        .await?;

        // Keyed by start instant; the first member to offer a start keeps it.
        let mut unique: BTreeMap<DateTime<Utc>, Slot> = BTreeMap::new();
        for slot in per_member.into_iter().flatten() {
            unique.entry(slot.start).or_insert(slot);
        }

        let candidates = unique.len();
        let assignees = try_join_all(
            unique.keys().map(|start| self.resolver.resolve_for_link(link, *start, duration_minutes)),
        )
        .await?;

        let merged: Vec<Slot> = unique
            .into_values()
            .zip(assignees)
            .filter_map(|(slot, assignee)| assignee.map(|user_id| slot.with_assignee(user_id)))
            .collect();

        debug!(
            booking_link_id = %link.id,
            %day,
            members = link.members.len(),
            candidates,
            slots = merged.len(),
            "Merged member slots"
        );

        Ok(merged)
    }
}
