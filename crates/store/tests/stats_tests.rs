//! Dashboard statistics integration tests.
//!
//! These tests pin the counter semantics of `dashboard_stats_at`: which
//! statuses gate each counter, the inclusive 30-day release window, and
//! the stable ordering of recent incidents.

mod common;

use warden_model::{
    IncidentKind, IncidentStatus, InmatePatch, InmateStatus, Severity, Shift, StaffStatus,
    VisitorStatus,
};
use warden_store::FacilityStore;

use common::{date, incident, inmate, inmate_releasing, staff_member, visitor};

// ============================================================================
// Status-gated counters
// ============================================================================

#[test]
fn test_total_inmates_counts_active_only() {
    let store = FacilityStore::new();
    store.add_inmate(inmate("INM001", "John", "Doe", InmateStatus::Active, "A"));
    store.add_inmate(inmate("INM002", "Mike", "Smith", InmateStatus::Released, "A"));
    store.add_inmate(inmate("INM003", "Robert", "Johnson", InmateStatus::Transferred, "B"));

    let stats = store.dashboard_stats_at(date(2024, 6, 1));
    assert_eq!(stats.total_inmates, 1);
}

#[test]
fn test_total_staff_counts_active_only() {
    let store = FacilityStore::new();
    store.add_staff(staff_member(
        "EMP001",
        "Sarah",
        "Wilson",
        "Security Officer",
        "Security",
        Shift::Day,
        StaffStatus::Active,
    ));
    store.add_staff(staff_member(
        "EMP002",
        "David",
        "Brown",
        "Medical Officer",
        "Medical",
        Shift::Night,
        StaffStatus::Inactive,
    ));

    let stats = store.dashboard_stats_at(date(2024, 6, 1));
    assert_eq!(stats.total_staff, 1);
}

#[test]
fn test_pending_visitors() {
    let store = FacilityStore::new();
    store.add_visitor(visitor(
        "Jane",
        "Doe",
        "Sister",
        VisitorStatus::Pending,
        None,
        "inm-001".into(),
    ));
    store.add_visitor(visitor(
        "Tom",
        "Brown",
        "Friend",
        VisitorStatus::Approved,
        None,
        "inm-001".into(),
    ));
    store.add_visitor(visitor(
        "Ann",
        "White",
        "Mother",
        VisitorStatus::Denied,
        None,
        "inm-002".into(),
    ));

    let stats = store.dashboard_stats_at(date(2024, 6, 1));
    assert_eq!(stats.pending_visitors, 1);
}

// ============================================================================
// Critical incidents
// ============================================================================

#[test]
fn test_critical_incidents_require_open_status() {
    let store = FacilityStore::new();
    store.add_security_incident(incident(
        IncidentKind::Fight,
        Severity::Critical,
        IncidentStatus::Open,
        date(2024, 1, 10),
    ));
    store.add_security_incident(incident(
        IncidentKind::Contraband,
        Severity::Critical,
        IncidentStatus::Resolved,
        date(2024, 1, 11),
    ));
    store.add_security_incident(incident(
        IncidentKind::Other,
        Severity::High,
        IncidentStatus::Open,
        date(2024, 1, 12),
    ));

    let stats = store.dashboard_stats_at(date(2024, 6, 1));
    assert_eq!(stats.critical_incidents, 1);
}

#[test]
fn test_critical_but_investigating_does_not_count() {
    let store = FacilityStore::new();
    store.add_security_incident(incident(
        IncidentKind::EscapeAttempt,
        Severity::Critical,
        IncidentStatus::Investigating,
        date(2024, 1, 10),
    ));

    let stats = store.dashboard_stats_at(date(2024, 6, 1));
    assert_eq!(stats.critical_incidents, 0);
}

// ============================================================================
// Upcoming releases
// ============================================================================

#[test]
fn test_release_exactly_thirty_days_out_is_included() {
    let today = date(2024, 6, 1);
    let store = FacilityStore::new();
    store.add_inmate(inmate_releasing("INM001", InmateStatus::Active, date(2024, 7, 1)));

    let stats = store.dashboard_stats_at(today);
    assert_eq!(stats.upcoming_releases, 1);
}

#[test]
fn test_release_thirty_one_days_out_is_excluded() {
    let today = date(2024, 6, 1);
    let store = FacilityStore::new();
    store.add_inmate(inmate_releasing("INM001", InmateStatus::Active, date(2024, 7, 2)));

    let stats = store.dashboard_stats_at(today);
    assert_eq!(stats.upcoming_releases, 0);
}

#[test]
fn test_release_today_is_included() {
    let today = date(2024, 6, 1);
    let store = FacilityStore::new();
    store.add_inmate(inmate_releasing("INM001", InmateStatus::Active, today));

    let stats = store.dashboard_stats_at(today);
    assert_eq!(stats.upcoming_releases, 1);
}

#[test]
fn test_release_in_the_past_is_excluded() {
    let today = date(2024, 6, 1);
    let store = FacilityStore::new();
    store.add_inmate(inmate_releasing("INM001", InmateStatus::Active, date(2024, 5, 31)));

    let stats = store.dashboard_stats_at(today);
    assert_eq!(stats.upcoming_releases, 0);
}

#[test]
fn test_release_window_requires_active_status() {
    let today = date(2024, 6, 1);
    let store = FacilityStore::new();
    store.add_inmate(inmate_releasing("INM001", InmateStatus::Released, date(2024, 6, 15)));
    store.add_inmate(inmate_releasing("INM002", InmateStatus::Transferred, date(2024, 6, 15)));

    let stats = store.dashboard_stats_at(today);
    assert_eq!(stats.upcoming_releases, 0);
}

// ============================================================================
// Recent incidents
// ============================================================================

#[test]
fn test_recent_incidents_are_five_newest_descending() {
    let store = FacilityStore::new();
    for day in 1..=7 {
        store.add_security_incident(incident(
            IncidentKind::Other,
            Severity::Low,
            IncidentStatus::Open,
            date(2024, 1, day),
        ));
    }

    let stats = store.dashboard_stats_at(date(2024, 6, 1));
    assert_eq!(stats.recent_incidents.len(), 5);

    let dates: Vec<_> = stats.recent_incidents.iter().map(|i| i.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2024, 1, 7),
            date(2024, 1, 6),
            date(2024, 1, 5),
            date(2024, 1, 4),
            date(2024, 1, 3),
        ]
    );
}

#[test]
fn test_recent_incidents_ties_keep_collection_order() {
    let store = FacilityStore::new();
    let first = store.add_security_incident(incident(
        IncidentKind::Fight,
        Severity::Low,
        IncidentStatus::Open,
        date(2024, 1, 10),
    ));
    let second = store.add_security_incident(incident(
        IncidentKind::Contraband,
        Severity::Low,
        IncidentStatus::Open,
        date(2024, 1, 10),
    ));

    let stats = store.dashboard_stats_at(date(2024, 6, 1));
    assert_eq!(stats.recent_incidents[0].id, first.id);
    assert_eq!(stats.recent_incidents[1].id, second.id);
}

// ============================================================================
// Capacity by block
// ============================================================================

#[test]
fn test_capacity_by_block_counts_active_inmates() {
    let store = FacilityStore::new();
    store.add_inmate(inmate("INM001", "John", "Doe", InmateStatus::Active, "A"));
    store.add_inmate(inmate("INM002", "Mike", "Smith", InmateStatus::Active, "A"));
    store.add_inmate(inmate("INM003", "Robert", "Johnson", InmateStatus::Released, "A"));
    store.add_inmate(inmate("INM004", "Carl", "Jones", InmateStatus::Active, ""));

    let stats = store.dashboard_stats_at(date(2024, 6, 1));
    assert_eq!(stats.capacity_by_block.get("A"), Some(&2));
    assert_eq!(stats.capacity_by_block.get("Unassigned"), Some(&1));
    assert_eq!(stats.capacity_by_block.values().sum::<usize>(), 3);
}

// ============================================================================
// Empty store and recomputation
// ============================================================================

#[test]
fn test_empty_store_produces_zeroed_stats() {
    let store = FacilityStore::new();
    let stats = store.dashboard_stats_at(date(2024, 6, 1));

    assert_eq!(stats.total_inmates, 0);
    assert_eq!(stats.total_staff, 0);
    assert_eq!(stats.pending_visitors, 0);
    assert_eq!(stats.critical_incidents, 0);
    assert_eq!(stats.upcoming_releases, 0);
    assert!(stats.recent_incidents.is_empty());
    assert!(stats.capacity_by_block.is_empty());
}

#[test]
fn test_stats_reflect_current_state_on_every_call() {
    let store = FacilityStore::new();
    let stored = store.add_inmate(inmate("INM001", "John", "Doe", InmateStatus::Active, "A"));
    assert_eq!(store.dashboard_stats_at(date(2024, 6, 1)).total_inmates, 1);

    store
        .update_inmate(
            &stored.id,
            InmatePatch {
                status: Some(InmateStatus::Released),
                ..InmatePatch::default()
            },
        )
        .expect("update should succeed");
    assert_eq!(store.dashboard_stats_at(date(2024, 6, 1)).total_inmates, 0);
}
