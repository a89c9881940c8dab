//! Booking service - guest-facing entry points of a booking link
//!
//! Wraps the merger and resolver with the link's own policy: duration,
//! buffer and advance notice come from the link, and the clock decides what
//! "too soon" means.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use slotwise_common::time::Clock;
use slotwise_domain::{BookingDecision, BookingLink, Result, SchedulingError, Slot};
use tracing::{debug, info};

use super::merger::SlotMerger;
use super::ports::BookingLinkStore;
use super::resolver::AssignmentResolver;

/// Slot listing and commit-time validation for booking links
pub struct BookingService {
    links: Arc<dyn BookingLinkStore>,
    merger: SlotMerger,
    resolver: AssignmentResolver,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(
        links: Arc<dyn BookingLinkStore>,
        merger: SlotMerger,
        resolver: AssignmentResolver,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { links, merger, resolver, clock }
    }

    /// Slots a guest may pick on local `day`.
    ///
    /// Slots starting inside the advance-notice window are dropped.
    ///
    /// # Errors
    /// - `SchedulingError::NotFound` if the link does not exist
    /// - calendar and store failures, unmodified
    pub async fn available_slots(&self, booking_link_id: &str, day: NaiveDate) -> Result<Vec<Slot>> {
        let link = self.load_link(booking_link_id).await?;
        let earliest = self.earliest_start(&link);

        let slots = self
            .merger
            .merge_for_link(&link, day, link.policy.duration_minutes, link.policy.buffer_minutes)
            .await?;

        let offered: Vec<Slot> = slots.into_iter().filter(|slot| slot.start >= earliest).collect();
        debug!(booking_link_id, %day, %earliest, slots = offered.len(), "Available slots");
        Ok(offered)
    }

    /// Re-validate a guest's chosen start right before the booking is
    /// persisted.
    ///
    /// # Errors
    /// - `SchedulingError::NotFound` if the link does not exist
    /// - store failures, unmodified
    pub async fn validate_booking(
        &self,
        booking_link_id: &str,
        start: DateTime<Utc>,
    ) -> Result<BookingDecision> {
        let link = self.load_link(booking_link_id).await?;

        let earliest = self.earliest_start(&link);
        if start < earliest {
            debug!(booking_link_id, %start, %earliest, "Requested start is too soon");
            return Ok(BookingDecision::TooSoon { earliest });
        }

        let duration = link.policy.duration_minutes;
        let end = start + Duration::minutes(i64::from(duration));

        let host = self.resolver.resolve_for_link(&link, start, duration).await?;

        Ok(match host {
            Some(user_id) => {
                info!(booking_link_id, %start, user_id = %user_id, "Booking validated");
                BookingDecision::Assigned { user_id, start, end }
            }
            None => BookingDecision::NoAvailableStaff,
        })
    }

    fn earliest_start(&self, link: &BookingLink) -> DateTime<Utc> {
        self.clock.now() + Duration::minutes(i64::from(link.policy.advance_notice_minutes))
    }

    async fn load_link(&self, booking_link_id: &str) -> Result<BookingLink> {
        self.links.find_booking_link(booking_link_id).await?.ok_or_else(|| {
            SchedulingError::NotFound(format!("Booking link not found: {booking_link_id}"))
        })
    }
}
