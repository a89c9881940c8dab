//! Mock port implementations for testing
//!
//! In-memory mocks for every core port. State sits behind a `Mutex` so a
//! test can seed or mutate it through the same `Arc` the engine holds.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use slotwise_core::{
    AssignmentRuleStore, BookingLinkStore, BookingStore, CalendarGateway, HolidayStore,
    WorkingHoursStore,
};
use slotwise_domain::{
    intervals_overlap, AssignmentRule, BookingLink, BookingStatus, BusyInterval, ExistingBooking,
    Holiday, Result as DomainResult, SchedulingError, StaffBookingCount, WorkingWindow,
};

/// Calendar mock returning seeded busy intervals, or a forced failure.
#[derive(Default)]
pub struct MockCalendar {
    busy: Mutex<HashMap<String, Vec<BusyInterval>>>,
    failure: Mutex<Option<SchedulingError>>,
    calls: Mutex<usize>,
}

impl MockCalendar {
    pub fn add_busy(&self, user_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.busy
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push(BusyInterval::new(start, end));
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: SchedulingError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl CalendarGateway for MockCalendar {
    async fn list_busy_intervals(
        &self,
        user_id: &str,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> DomainResult<Vec<BusyInterval>> {
        *self.calls.lock().unwrap() += 1;

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(self
            .busy
            .lock()
            .unwrap()
            .get(user_id)
            .map(|intervals| {
                intervals
                    .iter()
                    .filter(|i| intervals_overlap(i.start, i.end, day_start, day_end))
                    .copied()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MockWorkingHours {
    windows: Mutex<HashMap<(String, u8), WorkingWindow>>,
}

impl MockWorkingHours {
    pub fn set(&self, window: WorkingWindow) {
        self.windows
            .lock()
            .unwrap()
            .insert((window.user_id.clone(), window.day_of_week), window);
    }
}

#[async_trait]
impl WorkingHoursStore for MockWorkingHours {
    async fn get_working_window(
        &self,
        user_id: &str,
        day_of_week: u8,
    ) -> DomainResult<Option<WorkingWindow>> {
        Ok(self.windows.lock().unwrap().get(&(user_id.to_string(), day_of_week)).cloned())
    }
}

#[derive(Default)]
pub struct MockHolidays {
    holidays: Mutex<Vec<Holiday>>,
    failure: Mutex<Option<SchedulingError>>,
}

impl MockHolidays {
    pub fn add(&self, user_id: &str, date: NaiveDate, reason: Option<&str>) {
        self.holidays.lock().unwrap().push(Holiday {
            user_id: user_id.to_string(),
            date,
            reason: reason.map(str::to_string),
        });
    }

    /// Make every subsequent lookup fail with `error`.
    pub fn fail_with(&self, error: SchedulingError) {
        *self.failure.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl HolidayStore for MockHolidays {
    async fn find_holiday(&self, user_id: &str, date: NaiveDate) -> DomainResult<Option<Holiday>> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(self
            .holidays
            .lock()
            .unwrap()
            .iter()
            .find(|h| h.user_id == user_id && h.date == date)
            .cloned())
    }
}

#[derive(Default)]
pub struct MockBookings {
    bookings: Mutex<Vec<ExistingBooking>>,
    failure: Mutex<Option<SchedulingError>>,
}

impl MockBookings {
    /// Make every subsequent query fail with `error`.
    pub fn fail_with(&self, error: SchedulingError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    fn check_failure(&self) -> DomainResult<()> {
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    pub fn insert(&self, booking: ExistingBooking) {
        self.bookings.lock().unwrap().push(booking);
    }

    /// Record a confirmed booking and return its id.
    pub fn book(
        &self,
        booking_link_id: Option<&str>,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> String {
        let mut bookings = self.bookings.lock().unwrap();
        let id = format!("booking-{}", bookings.len() + 1);
        bookings.push(ExistingBooking {
            id: id.clone(),
            booking_link_id: booking_link_id.map(str::to_string),
            user_id: user_id.to_string(),
            start_time: start,
            end_time: end,
            status: BookingStatus::Confirmed,
            created_at,
        });
        id
    }

    pub fn cancel(&self, booking_id: &str) {
        if let Some(booking) =
            self.bookings.lock().unwrap().iter_mut().find(|b| b.id == booking_id)
        {
            booking.status = BookingStatus::Cancelled;
        }
    }
}

#[async_trait]
impl BookingStore for MockBookings {
    async fn find_overlapping(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: &[BookingStatus],
    ) -> DomainResult<Vec<ExistingBooking>> {
        self.check_failure()?;
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id && !exclude.contains(&b.status))
            .filter(|b| b.overlaps(start, end))
            .cloned()
            .collect())
    }

    async fn find_last_assigned(
        &self,
        booking_link_id: &str,
        user_id: &str,
    ) -> DomainResult<Option<ExistingBooking>> {
        self.check_failure()?;
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id && b.is_active())
            .filter(|b| b.booking_link_id.as_deref() == Some(booking_link_id))
            .max_by_key(|b| b.created_at)
            .cloned())
    }

    async fn count_active(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<u64> {
        self.check_failure()?;
        let count = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id && b.is_active())
            .filter(|b| b.start_time >= start && b.start_time < end)
            .count();
        Ok(count as u64)
    }

    async fn active_counts_by_user(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<StaffBookingCount>> {
        self.check_failure()?;
        let mut counts: HashMap<String, u64> = HashMap::new();
        for booking in self.bookings.lock().unwrap().iter() {
            if booking.is_active() && booking.start_time >= start && booking.start_time < end {
                *counts.entry(booking.user_id.clone()).or_default() += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|(user_id, booking_count)| StaffBookingCount { user_id, booking_count })
            .collect())
    }
}

#[derive(Default)]
pub struct MockLinks {
    links: Mutex<HashMap<String, BookingLink>>,
}

impl MockLinks {
    pub fn insert(&self, link: BookingLink) {
        self.links.lock().unwrap().insert(link.id.clone(), link);
    }
}

#[async_trait]
impl BookingLinkStore for MockLinks {
    async fn find_booking_link(&self, booking_link_id: &str) -> DomainResult<Option<BookingLink>> {
        Ok(self.links.lock().unwrap().get(booking_link_id).cloned())
    }
}

#[derive(Default)]
pub struct MockRules {
    rules: Mutex<Vec<AssignmentRule>>,
}

impl MockRules {
    pub fn add(&self, user_id: &str, priority: i32, is_active: bool) {
        self.rules.lock().unwrap().push(AssignmentRule {
            user_id: user_id.to_string(),
            priority,
            is_active,
        });
    }
}

#[async_trait]
impl AssignmentRuleStore for MockRules {
    async fn list_active_rules(&self) -> DomainResult<Vec<AssignmentRule>> {
        Ok(self.rules.lock().unwrap().iter().filter(|r| r.is_active).cloned().collect())
    }
}
