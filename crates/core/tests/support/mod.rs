//! Shared test helpers for `slotwise-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that
//! scheduling tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod ports;

use std::sync::Arc;

use slotwise_common::time::MockClock;
use slotwise_core::{SchedulingEngine, SchedulingPorts};
use slotwise_domain::SchedulingConfig;

pub use fixtures::*;
pub use ports::*;

/// Every mock port plus an engine wired over them.
pub struct TestHarness {
    pub calendar: Arc<MockCalendar>,
    pub working_hours: Arc<MockWorkingHours>,
    pub holidays: Arc<MockHolidays>,
    pub bookings: Arc<MockBookings>,
    pub links: Arc<MockLinks>,
    pub rules: Arc<MockRules>,
    pub clock: MockClock,
    pub engine: SchedulingEngine,
}

impl TestHarness {
    /// Harness at the Unix epoch with the default +09:00 configuration.
    pub fn new() -> Self {
        Self::with_clock(MockClock::default())
    }

    pub fn with_clock(clock: MockClock) -> Self {
        let calendar = Arc::new(MockCalendar::default());
        let working_hours = Arc::new(MockWorkingHours::default());
        let holidays = Arc::new(MockHolidays::default());
        let bookings = Arc::new(MockBookings::default());
        let links = Arc::new(MockLinks::default());
        let rules = Arc::new(MockRules::default());

        let ports = SchedulingPorts {
            calendar: calendar.clone(),
            working_hours: working_hours.clone(),
            holidays: holidays.clone(),
            bookings: bookings.clone(),
            links: links.clone(),
            rules: rules.clone(),
        };

        let engine =
            SchedulingEngine::from_ports(ports, &SchedulingConfig::default(), Arc::new(clock.clone()))
                .expect("default config is valid");

        Self { calendar, working_hours, holidays, bookings, links, rules, clock, engine }
    }

    /// The harness mocks as a fresh port set, for building other engines.
    pub fn ports(&self) -> SchedulingPorts {
        SchedulingPorts {
            calendar: self.calendar.clone(),
            working_hours: self.working_hours.clone(),
            holidays: self.holidays.clone(),
            bookings: self.bookings.clone(),
            links: self.links.clone(),
            rules: self.rules.clone(),
        }
    }
}
