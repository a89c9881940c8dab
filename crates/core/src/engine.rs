//! Scheduling engine - wires the services over one set of ports
//!
//! Request handlers build a single [`SchedulingEngine`] at startup and
//! borrow the service they need per request. Every service shares the same
//! port handles, timezone and fallback working window.

use std::sync::Arc;

use slotwise_common::time::Clock;
use slotwise_domain::{Result, SchedulingConfig};
use tracing::info;

use crate::assignment::ports::{AssignmentRuleStore, BookingLinkStore};
use crate::assignment::{AssignmentResolver, BookingService, PriorityAssigner, SlotMerger};
use crate::availability::ports::{BookingStore, CalendarGateway, HolidayStore, WorkingHoursStore};
use crate::availability::{AvailabilityChecker, OrgTimezone, SlotGenerator, StaffDirectory};

/// Every port the engine needs
#[derive(Clone)]
pub struct SchedulingPorts {
    pub calendar: Arc<dyn CalendarGateway>,
    pub working_hours: Arc<dyn WorkingHoursStore>,
    pub holidays: Arc<dyn HolidayStore>,
    pub bookings: Arc<dyn BookingStore>,
    pub links: Arc<dyn BookingLinkStore>,
    pub rules: Arc<dyn AssignmentRuleStore>,
}

pub struct SchedulingEngine {
    zone: OrgTimezone,
    generator: SlotGenerator,
    checker: AvailabilityChecker,
    resolver: AssignmentResolver,
    merger: SlotMerger,
    booking_service: BookingService,
    staff: StaffDirectory,
    priority: PriorityAssigner,
}

impl SchedulingEngine {
    /// Build every service from `ports` and the scheduling configuration.
    ///
    /// # Errors
    /// Returns `SchedulingError::Config` when `config` fails
    /// [`SchedulingConfig::validate`].
    pub fn from_ports(
        ports: SchedulingPorts,
        config: &SchedulingConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;
        let zone = OrgTimezone::from_config(config)?;

        let generator = SlotGenerator::new(
            Arc::clone(&ports.calendar),
            Arc::clone(&ports.working_hours),
            Arc::clone(&ports.holidays),
            zone,
        )?
        .with_config(config)?;

        let checker =
            AvailabilityChecker::new(Arc::clone(&ports.bookings), Arc::clone(&ports.holidays), zone);
        let resolver = AssignmentResolver::new(
            Arc::clone(&ports.links),
            Arc::clone(&ports.bookings),
            checker.clone(),
        );
        let merger = SlotMerger::new(Arc::clone(&ports.links), generator.clone(), resolver.clone());
        let booking_service =
            BookingService::new(Arc::clone(&ports.links), merger.clone(), resolver.clone(), clock);
        let staff = StaffDirectory::new(
            Arc::clone(&ports.working_hours),
            Arc::clone(&ports.holidays),
            Arc::clone(&ports.bookings),
            zone,
        );
        let priority = PriorityAssigner::new(ports.links, ports.rules, generator.clone());

        info!(offset = %zone.offset(), "Scheduling engine ready");

        Ok(Self { zone, generator, checker, resolver, merger, booking_service, staff, priority })
    }

    pub const fn zone(&self) -> &OrgTimezone {
        &self.zone
    }

    pub const fn generator(&self) -> &SlotGenerator {
        &self.generator
    }

    pub const fn checker(&self) -> &AvailabilityChecker {
        &self.checker
    }

    pub const fn resolver(&self) -> &AssignmentResolver {
        &self.resolver
    }

    pub const fn merger(&self) -> &SlotMerger {
        &self.merger
    }

    pub const fn booking_service(&self) -> &BookingService {
        &self.booking_service
    }

    pub const fn staff(&self) -> &StaffDirectory {
        &self.staff
    }

    pub const fn priority(&self) -> &PriorityAssigner {
        &self.priority
    }
}
