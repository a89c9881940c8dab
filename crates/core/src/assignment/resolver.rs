//! Assignment resolver - picks the host for a booking-link slot
//!
//! # Policy
//! - No members: the link owner hosts.
//! - Round-robin off (ALL): every member must be free. The `Owner` member,
//!   or the link owner, hosts.
//! - Round-robin on (ANY): among free members, the one whose most recent
//!   booking on this link was created longest ago. Members never assigned
//!   count as assigned at the Unix epoch. Ties keep member-list order.
//!
//! Fairness is recomputed from booking history on every call.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use futures::future::try_join_all;
use slotwise_domain::{BookingLink, Result, SchedulingError};
use tracing::{debug, info, warn};

use super::ports::BookingLinkStore;
use crate::availability::ports::BookingStore;
use crate::availability::AvailabilityChecker;

/// Chooses which member hosts a booking
#[derive(Clone)]
pub struct AssignmentResolver {
    links: Arc<dyn BookingLinkStore>,
    bookings: Arc<dyn BookingStore>,
    checker: AvailabilityChecker,
}

impl AssignmentResolver {
    pub fn new(
        links: Arc<dyn BookingLinkStore>,
        bookings: Arc<dyn BookingStore>,
        checker: AvailabilityChecker,
    ) -> Self {
        Self { links, bookings, checker }
    }

    /// Host for `[start, start + duration_minutes)` on the link, or `None`
    /// when nobody can take it.
    ///
    /// # Errors
    /// - `SchedulingError::NotFound` if the link does not exist
    /// - store failures, unmodified
    pub async fn resolve_assignment(
        &self,
        booking_link_id: &str,
        start: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Result<Option<String>> {
        let link = self.links.find_booking_link(booking_link_id).await?.ok_or_else(|| {
            SchedulingError::NotFound(format!("Booking link not found: {booking_link_id}"))
        })?;

        self.resolve_for_link(&link, start, duration_minutes).await
    }

    /// Same as [`Self::resolve_assignment`] for an already loaded link.
    ///
    /// # Errors
    /// Propagates store failures.
    pub async fn resolve_for_link(
        &self,
        link: &BookingLink,
        start: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Result<Option<String>> {
        if !link.has_members() {
            return Ok(Some(link.owner_id.clone()));
        }

        if !link.policy.is_consistent() {
            warn!(
                booking_link_id = %link.id,
                booking_condition = %link.policy.booking_condition,
                round_robin_enabled = link.policy.round_robin_enabled,
                "Inconsistent booking policy, round-robin flag wins"
            );
        }

        let end = start + Duration::minutes(i64::from(duration_minutes));
        let availability = try_join_all(
            link.members.iter().map(|m| self.checker.is_available(&m.user_id, start, end)),
        )
        .await?;

        if !link.policy.round_robin_enabled {
            if availability.iter().all(|free| *free) {
                return Ok(Some(link.default_host().to_string()));
            }
            debug!(booking_link_id = %link.id, %start, "Not every member is free");
            return Ok(None);
        }

        let free: Vec<&str> = link
            .members
            .iter()
            .zip(&availability)
            .filter(|(_, free)| **free)
            .map(|(m, _)| m.user_id.as_str())
            .collect();

        if free.is_empty() {
            debug!(booking_link_id = %link.id, %start, "No member is free");
            return Ok(None);
        }

        let last_assigned = try_join_all(
            free.iter().map(|user_id| self.last_assigned_at(&link.id, user_id)),
        )
        .await?;

        let mut candidates: Vec<(&str, DateTime<Utc>)> =
            free.into_iter().zip(last_assigned).collect();
        // Stable: equal timestamps keep member-list order.
        candidates.sort_by_key(|(_, at)| *at);

        let chosen = candidates.first().map(|(user_id, _)| (*user_id).to_string());
        if let Some(user_id) = &chosen {
            info!(booking_link_id = %link.id, %start, user_id = %user_id, "Round-robin assignment");
        }
        Ok(chosen)
    }

    async fn last_assigned_at(&self, booking_link_id: &str, user_id: &str) -> Result<DateTime<Utc>> {
        Ok(self
            .bookings
            .find_last_assigned(booking_link_id, user_id)
            .await?
            .map_or(DateTime::<Utc>::UNIX_EPOCH, |booking| booking.created_at))
    }
}
