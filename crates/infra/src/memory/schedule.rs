//! In-memory working hours and holidays.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use slotwise_core::{HolidayStore, WorkingHoursStore};
use slotwise_domain::{Holiday, Result, WorkingWindow};

/// Weekly working windows keyed by `(user_id, day_of_week)`
#[derive(Default)]
pub struct InMemoryWorkingHours {
    windows: RwLock<HashMap<(String, u8), WorkingWindow>>,
}

impl InMemoryWorkingHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the window for its user and weekday.
    pub fn upsert(&self, window: WorkingWindow) {
        self.windows.write().insert((window.user_id.clone(), window.day_of_week), window);
    }

    pub fn remove(&self, user_id: &str, day_of_week: u8) -> Option<WorkingWindow> {
        self.windows.write().remove(&(user_id.to_string(), day_of_week))
    }
}

#[async_trait]
impl WorkingHoursStore for InMemoryWorkingHours {
    async fn get_working_window(
        &self,
        user_id: &str,
        day_of_week: u8,
    ) -> Result<Option<WorkingWindow>> {
        Ok(self.windows.read().get(&(user_id.to_string(), day_of_week)).cloned())
    }
}

/// Holidays keyed by `(user_id, date)`; one per user and day
#[derive(Default)]
pub struct InMemoryHolidays {
    holidays: RwLock<HashMap<(String, NaiveDate), Holiday>>,
}

impl InMemoryHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, holiday: Holiday) {
        self.holidays.write().insert((holiday.user_id.clone(), holiday.date), holiday);
    }

    pub fn remove(&self, user_id: &str, date: NaiveDate) -> Option<Holiday> {
        self.holidays.write().remove(&(user_id.to_string(), date))
    }
}

#[async_trait]
impl HolidayStore for InMemoryHolidays {
    async fn find_holiday(&self, user_id: &str, date: NaiveDate) -> Result<Option<Holiday>> {
        Ok(self.holidays.read().get(&(user_id.to_string(), date)).cloned())
    }
}
