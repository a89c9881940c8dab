//! Organisation timezone
//!
//! Every wall-clock conversion in the engine goes through [`OrgTimezone`].
//! The organisation runs on one fixed UTC offset (UTC+9 unless configured
//! otherwise); users do not carry their own timezone. Daylight-saving
//! transitions are out of scope.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike, Utc,
};
use slotwise_domain::constants::DEFAULT_UTC_OFFSET_MINUTES;
use slotwise_domain::{Result, SchedulingConfig, SchedulingError};

/// Fixed-offset conversions between local calendar values and UTC instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrgTimezone {
    offset: FixedOffset,
}

impl OrgTimezone {
    /// # Errors
    /// Returns `SchedulingError::Config` if chrono rejects the offset
    /// (beyond ±23:59). Configured offsets are bounded tighter by
    /// [`SchedulingConfig::validate`].
    pub fn from_offset_minutes(minutes: i32) -> Result<Self> {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| SchedulingError::Config(format!("Invalid UTC offset: {minutes} minutes")))?;
        Ok(Self { offset })
    }

    /// # Errors
    /// Returns `SchedulingError::Config` for an invalid offset.
    pub fn from_config(config: &SchedulingConfig) -> Result<Self> {
        Self::from_offset_minutes(config.utc_offset_minutes)
    }

    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Instant of `time` on local `date`.
    #[must_use]
    pub fn instant(&self, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        self.from_local(date.and_time(time))
    }

    /// Local day as the half-open range `[00:00, next day 00:00)`.
    #[must_use]
    pub fn day_bounds(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.instant(date, NaiveTime::MIN);
        (start, start + Duration::days(1))
    }

    /// Local calendar month containing `date`, half-open.
    ///
    /// # Errors
    /// Returns `SchedulingError::Internal` if the month lies outside
    /// chrono's supported date range.
    pub fn month_bounds(&self, date: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let overflow = || SchedulingError::Internal(format!("Month of {date} is out of range"));

        let first = date.with_day(1).ok_or_else(overflow)?;
        let next_first = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        }
        .ok_or_else(overflow)?;

        Ok((self.instant(first, NaiveTime::MIN), self.instant(next_first, NaiveTime::MIN)))
    }

    /// Local calendar date of an instant.
    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.to_local(instant).date()
    }

    /// Local wall-clock time of an instant.
    #[must_use]
    pub fn local_time(&self, instant: DateTime<Utc>) -> NaiveTime {
        self.to_local(instant).time()
    }

    /// Round up to the next whole local hour; whole hours are unchanged.
    ///
    /// `09:30` becomes `10:00`, `10:00` stays `10:00`.
    #[must_use]
    pub fn ceil_to_hour(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let local = self.to_local(instant);
        let floored = local.date().and_time(NaiveTime::MIN) + Duration::hours(i64::from(local.hour()));

        if floored == local {
            instant
        } else {
            self.from_local(floored + Duration::hours(1))
        }
    }

    fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }

    fn from_local(&self, local: NaiveDateTime) -> DateTime<Utc> {
        let utc = local - Duration::seconds(i64::from(self.offset.local_minus_utc()));
        Utc.from_utc_datetime(&utc)
    }
}

impl Default for OrgTimezone {
    fn default() -> Self {
        // DEFAULT_UTC_OFFSET_MINUTES is +09:00, always a valid offset.
        let offset = FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60)
            .unwrap_or_else(|| Utc.fix());
        Self { offset }
    }
}
