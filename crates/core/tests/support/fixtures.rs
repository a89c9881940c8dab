//! Fixture builders for scheduling tests.
//!
//! All local times are in the default organisation timezone (+09:00).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use slotwise_core::OrgTimezone;
use slotwise_domain::{
    BookingCondition, BookingLink, BookingLinkMember, BookingPolicy, MemberRole, WorkingWindow,
};

/// Monday used by most scenarios.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

/// Instant of local `hh:mm` on `date`.
pub fn local(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    OrgTimezone::default().instant(date, NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
}

/// Instant of local `hh:mm` on [`monday`].
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    local(monday(), hour, minute)
}

/// Available window on Monday (`day_of_week = 1`).
pub fn monday_window(user_id: &str, start: &str, end: &str) -> WorkingWindow {
    WorkingWindow::from_hhmm(user_id, 1, start, end).unwrap()
}

pub fn member(link_id: &str, user_id: &str, role: MemberRole) -> BookingLinkMember {
    BookingLinkMember { booking_link_id: link_id.to_string(), user_id: user_id.to_string(), role }
}

/// Round-robin link whose members are all viewers.
pub fn round_robin_link(id: &str, owner_id: &str, members: &[&str]) -> BookingLink {
    BookingLink {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        policy: BookingPolicy {
            booking_condition: BookingCondition::Any,
            round_robin_enabled: true,
            ..BookingPolicy::default()
        },
        members: members.iter().map(|u| member(id, u, MemberRole::Viewer)).collect(),
    }
}

/// Link requiring every member, with the listed roles.
pub fn all_members_link(id: &str, owner_id: &str, members: &[(&str, MemberRole)]) -> BookingLink {
    BookingLink {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        policy: BookingPolicy::default(),
        members: members.iter().map(|(u, role)| member(id, u, *role)).collect(),
    }
}

/// Link without members: the owner hosts everything.
pub fn solo_link(id: &str, owner_id: &str) -> BookingLink {
    BookingLink {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        policy: BookingPolicy::default(),
        members: Vec::new(),
    }
}

pub fn starts(slots: &[slotwise_domain::Slot]) -> Vec<DateTime<Utc>> {
    slots.iter().map(|s| s.start).collect()
}
