//! Booking-link facade, priority rules and staff directory.

mod support;

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime};
use slotwise_common::time::MockClock;
use slotwise_core::SchedulingEngine;
use slotwise_domain::constants::MAX_UTC_OFFSET_MINUTES;
use slotwise_domain::{
    BookingDecision, SchedulingConfig, SchedulingError, StaffBookingCount, StaffDayStatus,
};
use support::*;

fn harness_at(hour: u32, minute: u32) -> TestHarness {
    TestHarness::with_clock(MockClock::new(at(hour, minute)))
}

#[tokio::test]
async fn test_available_slots_respect_advance_notice() {
    let h = harness_at(8, 30);
    let mut link = solo_link("solo", "owner");
    link.policy.advance_notice_minutes = 60;
    h.links.insert(link);
    h.working_hours.set(monday_window("owner", "09:00", "12:00"));

    let slots = h.engine.booking_service().available_slots("solo", monday()).await.unwrap();

    assert_eq!(starts(&slots), vec![at(10, 0), at(11, 0)]);
}

#[tokio::test]
async fn test_available_slots_use_link_duration() {
    let h = harness_at(0, 0);
    let mut link = round_robin_link("rr", "owner", &["alice"]);
    link.policy.duration_minutes = 30;
    h.links.insert(link);
    h.working_hours.set(monday_window("alice", "09:00", "11:00"));

    let slots = h.engine.booking_service().available_slots("rr", monday()).await.unwrap();

    assert_eq!(starts(&slots), vec![at(9, 0), at(10, 0)]);
    assert!(slots.iter().all(|s| s.duration() == Duration::minutes(30)));
    assert!(slots.iter().all(|s| s.assigned_user.as_deref() == Some("alice")));
}

#[tokio::test]
async fn test_available_slots_for_past_day_are_empty() {
    let h = TestHarness::with_clock(MockClock::new(at(9, 0) + Duration::days(7)));
    h.links.insert(solo_link("solo", "owner"));

    let slots = h.engine.booking_service().available_slots("solo", monday()).await.unwrap();

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_validate_rejects_start_inside_notice() {
    let h = harness_at(8, 30);
    let mut link = solo_link("solo", "owner");
    link.policy.advance_notice_minutes = 60;
    h.links.insert(link);

    let decision = h.engine.booking_service().validate_booking("solo", at(9, 0)).await.unwrap();

    assert_eq!(decision, BookingDecision::TooSoon { earliest: at(9, 30) });
}

#[tokio::test]
async fn test_validate_assigns_owner_of_solo_link() {
    let h = harness_at(8, 0);
    let mut link = solo_link("solo", "owner");
    link.policy.duration_minutes = 45;
    h.links.insert(link);

    let decision = h.engine.booking_service().validate_booking("solo", at(10, 0)).await.unwrap();

    assert_eq!(
        decision,
        BookingDecision::Assigned { user_id: "owner".into(), start: at(10, 0), end: at(10, 45) }
    );
}

#[tokio::test]
async fn test_validate_reports_no_available_staff() {
    let h = harness_at(8, 0);
    h.links.insert(round_robin_link("rr", "owner", &["alice", "bob"]));
    h.bookings.book(None, "alice", at(10, 0), at(11, 0), at(7, 0));
    h.bookings.book(None, "bob", at(10, 0), at(11, 0), at(7, 0));

    let decision = h.engine.booking_service().validate_booking("rr", at(10, 0)).await.unwrap();

    assert_eq!(decision, BookingDecision::NoAvailableStaff);
}

#[tokio::test]
async fn test_validate_recomputes_after_slot_list() {
    let h = harness_at(8, 0);
    h.links.insert(round_robin_link("rr", "owner", &["alice", "bob"]));
    h.working_hours.set(monday_window("alice", "09:00", "12:00"));

    let listed = h.engine.booking_service().available_slots("rr", monday()).await.unwrap();
    assert_eq!(listed[1].assigned_user.as_deref(), Some("alice"));

    // Alice gets booked elsewhere between listing and commit.
    h.bookings.book(None, "alice", at(10, 0), at(11, 0), at(8, 0));

    let decision = h.engine.booking_service().validate_booking("rr", at(10, 0)).await.unwrap();
    assert!(matches!(decision, BookingDecision::Assigned { ref user_id, .. } if user_id == "bob"));
}

#[tokio::test]
async fn test_unknown_link_is_rejected() {
    let h = harness_at(8, 0);

    let err = h.engine.booking_service().available_slots("nope", monday()).await.unwrap_err();
    assert!(matches!(err, SchedulingError::NotFound(_)));

    let err = h.engine.booking_service().validate_booking("nope", at(10, 0)).await.unwrap_err();
    assert!(matches!(err, SchedulingError::NotFound(_)));
}

#[tokio::test]
async fn test_priority_without_rules_assigns_owner() {
    let h = TestHarness::new();
    h.links.insert(solo_link("solo", "owner"));
    h.rules.add("alice", 1, false);

    let host = h.engine.priority().assign("solo", at(10, 0), 60).await.unwrap();

    assert_eq!(host.as_deref(), Some("owner"));
}

#[tokio::test]
async fn test_priority_picks_lowest_priority_value_first() {
    let h = TestHarness::new();
    h.links.insert(solo_link("solo", "owner"));
    h.rules.add("alice", 2, true);
    h.rules.add("bob", 1, true);

    let priority = h.engine.priority();
    assert_eq!(priority.assign("solo", at(10, 0), 60).await.unwrap().as_deref(), Some("bob"));

    h.calendar.add_busy("bob", at(10, 0), at(11, 0));
    assert_eq!(priority.assign("solo", at(10, 0), 60).await.unwrap().as_deref(), Some("alice"));

    h.holidays.add("alice", monday(), None);
    assert_eq!(priority.assign("solo", at(10, 0), 60).await.unwrap(), None);
}

#[tokio::test]
async fn test_priority_requires_exact_slot_start() {
    let h = TestHarness::new();
    h.links.insert(solo_link("solo", "owner"));
    h.rules.add("alice", 1, true);

    let priority = h.engine.priority();
    assert!(priority.is_user_available("alice", at(10, 0), 60).await.unwrap());
    assert!(!priority.is_user_available("alice", at(10, 30), 60).await.unwrap());
    assert_eq!(priority.assign("solo", at(10, 30), 60).await.unwrap(), None);
}

#[tokio::test]
async fn test_priority_unknown_link() {
    let h = TestHarness::new();

    let err = h.engine.priority().assign("nope", at(10, 0), 60).await.unwrap_err();

    assert!(matches!(err, SchedulingError::NotFound(_)));
}

#[tokio::test]
async fn test_day_status() {
    let h = TestHarness::new();
    let staff = h.engine.staff();
    let tuesday = monday().succ_opt().unwrap();

    assert_eq!(staff.day_status("alice", monday()).await.unwrap(), StaffDayStatus::NonWorkingDay);

    h.working_hours.set(monday_window("alice", "10:00", "16:00"));
    assert_eq!(
        staff.day_status("alice", monday()).await.unwrap(),
        StaffDayStatus::Working {
            start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        }
    );

    h.holidays.add("alice", monday(), Some("Conference"));
    h.holidays.add("alice", tuesday, None);
    assert_eq!(
        staff.day_status("alice", monday()).await.unwrap(),
        StaffDayStatus::OnHoliday { reason: Some("Conference".into()) }
    );
    // No window on Tuesday: the holiday is irrelevant.
    assert_eq!(staff.day_status("alice", tuesday).await.unwrap(), StaffDayStatus::NonWorkingDay);

    h.working_hours.set(monday_window("bob", "10:00", "16:00").unavailable());
    assert_eq!(staff.day_status("bob", monday()).await.unwrap(), StaffDayStatus::NonWorkingDay);
}

#[tokio::test]
async fn test_monthly_counts_use_local_month() {
    let h = TestHarness::new();
    let june = monday();
    let july_first = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

    h.bookings.book(None, "alice", at(10, 0), at(11, 0), at(0, 0));
    h.bookings.book(None, "alice", at(11, 0), at(12, 0), at(0, 0));
    let cancelled = h.bookings.book(None, "alice", at(12, 0), at(13, 0), at(0, 0));
    h.bookings.cancel(&cancelled);
    // 00:30 local on July 1 is still June 30 in UTC.
    h.bookings.book(None, "alice", local(july_first, 0, 30), local(july_first, 1, 30), at(0, 0));
    h.bookings.book(None, "bob", at(10, 0), at(11, 0), at(0, 0));
    h.bookings.book(None, "carol", at(10, 0), at(11, 0), at(0, 0));

    let staff = h.engine.staff();
    assert_eq!(staff.monthly_booking_count("alice", june).await.unwrap(), 2);
    assert_eq!(staff.monthly_booking_count("alice", july_first).await.unwrap(), 1);

    let stats = staff.monthly_booking_stats(june).await.unwrap();
    assert_eq!(
        stats,
        vec![
            StaffBookingCount { user_id: "alice".into(), booking_count: 2 },
            StaffBookingCount { user_id: "bob".into(), booking_count: 1 },
            StaffBookingCount { user_id: "carol".into(), booking_count: 1 },
        ]
    );
}

#[tokio::test]
async fn test_validate_propagates_booking_store_failure() {
    let h = harness_at(8, 0);
    h.links.insert(round_robin_link("rr", "owner", &["alice", "bob"]));
    h.bookings.fail_with(SchedulingError::Store("connection reset".into()));

    let err = h.engine.booking_service().validate_booking("rr", at(10, 0)).await.unwrap_err();

    assert_eq!(err, SchedulingError::Store("connection reset".into()));
}

#[test]
fn test_engine_applies_config_offset_bounds() {
    let h = TestHarness::new();
    let clock = Arc::new(h.clock.clone());
    let mut config = SchedulingConfig::default();

    config.utc_offset_minutes = MAX_UTC_OFFSET_MINUTES;
    assert!(SchedulingEngine::from_ports(h.ports(), &config, clock.clone()).is_ok());

    for offset in [MAX_UTC_OFFSET_MINUTES + 1, 20 * 60, i32::MIN] {
        config.utc_offset_minutes = offset;
        let result = SchedulingEngine::from_ports(h.ports(), &config, clock.clone());
        assert!(matches!(result, Err(SchedulingError::Config(_))), "offset {offset}");
    }
}
