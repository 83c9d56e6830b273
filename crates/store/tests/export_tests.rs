//! Export serialization integration tests.

mod common;

use warden_model::{IncidentKind, IncidentStatus, InmateStatus, Severity, Shift, StaffStatus};
use warden_store::{ExportOptions, FacilityStore, Report, ReportKind, export_json, report_csv};

use common::{date, incident, inmate, staff_member};

fn store_with_mixed_statuses() -> FacilityStore {
    let store = FacilityStore::new();
    store.add_inmate(inmate("INM001", "John", "Doe", InmateStatus::Active, "A"));
    store.add_inmate(inmate("INM002", "Mike", "Smith", InmateStatus::Released, "B"));
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
    store
}

// ============================================================================
// JSON export
// ============================================================================

#[test]
fn test_export_restricts_to_active_by_default() {
    let store = store_with_mixed_statuses();
    let value = export_json(&store, &ExportOptions::default());

    assert_eq!(value["inmates"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["staff"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["metadata"]["total_records"], 2);
    assert_eq!(value["metadata"]["version"], "1.0");
}

#[test]
fn test_export_include_inactive_keeps_everything() {
    let store = store_with_mixed_statuses();
    let options = ExportOptions {
        include_inactive: true,
        ..ExportOptions::default()
    };
    let value = export_json(&store, &options);

    assert_eq!(value["inmates"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["staff"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["metadata"]["total_records"], 4);
}

#[test]
fn test_export_omits_deselected_collections() {
    let store = store_with_mixed_statuses();
    let options = ExportOptions {
        staff: false,
        visitors: false,
        medical_records: false,
        security_incidents: false,
        supply_items: false,
        ..ExportOptions::default()
    };
    let value = export_json(&store, &options);

    assert!(value.get("inmates").is_some());
    assert!(value.get("staff").is_none());
    assert!(value.get("visitors").is_none());
    assert_eq!(value["metadata"]["total_records"], 1);
}

#[test]
fn test_export_of_empty_store_is_well_formed() {
    let store = FacilityStore::new();
    let value = export_json(&store, &ExportOptions::default());

    assert_eq!(value["inmates"].as_array().map(Vec::len), Some(0));
    assert_eq!(value["metadata"]["total_records"], 0);
    assert!(value["metadata"]["export_date"].is_string());
}

// ============================================================================
// CSV rendering
// ============================================================================

#[test]
fn test_report_csv_renders_summary_and_sections() {
    let store = FacilityStore::new();
    store.add_inmate(inmate("INM001", "John", "Doe", InmateStatus::Active, "A"));
    store.add_inmate(inmate("INM002", "Mike", "Smith", InmateStatus::Active, "B"));

    let report = store.generate_report(ReportKind::InmatePopulation, None);
    let csv = report_csv(&report);

    assert!(csv.starts_with("Inmate Population Report\n"));
    assert!(csv.contains("Summary\n"));
    assert!(csv.contains("total_inmates,2\n"));
    assert!(csv.contains("active_inmates,2\n"));
    assert!(csv.contains("occupancy_rate,0.4\n"));
    assert!(csv.contains("Cell Blocks\n"));
    assert!(csv.contains("A,1\n"));
    assert!(csv.contains("B,1\n"));
    assert!(csv.contains("Crime Types\n"));
    assert!(csv.contains("Theft,2\n"));
}

#[test]
fn test_security_report_csv() {
    let store = FacilityStore::new();
    store.add_security_incident(incident(
        IncidentKind::Fight,
        Severity::Critical,
        IncidentStatus::Open,
        date(2024, 1, 10),
    ));

    let report = store.generate_report(ReportKind::SecurityIncidents, None);
    assert!(matches!(report, Report::SecurityIncidents(_)));

    let csv = report_csv(&report);
    assert!(csv.starts_with("Security Incidents Report\n"));
    assert!(csv.contains("total_incidents,1\n"));
    assert!(csv.contains("critical_incidents,1\n"));
    assert!(csv.contains("Incident Kinds\n"));
    assert!(csv.contains("fight,1\n"));
    assert!(csv.contains("Severity Levels\n"));
    assert!(csv.contains("critical,1\n"));
}

#[test]
fn test_empty_report_csv_still_has_summary() {
    let store = FacilityStore::new();
    let report = store.generate_report(ReportKind::VisitorStatistics, None);
    let csv = report_csv(&report);

    assert!(csv.starts_with("Visitor Statistics Report\n"));
    assert!(csv.contains("total_visitors,0\n"));
    assert!(csv.contains("Relationships\n"));
}
