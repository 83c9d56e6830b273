//! Shared fixtures for store integration tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};

use warden_model::{
    ContactInfo, EmergencyContact, IncidentKind, IncidentStatus, Inmate, InmateStatus,
    MedicalRecord, MedicalRecordKind, RecordId, SecurityIncident, Severity, Shift, Staff,
    StaffStatus, SupplyCategory, SupplyItem, SupplyStatus, Visitor, VisitorStatus,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

/// An inmate draft with the fields tests most often vary.
pub fn inmate(number: &str, first: &str, last: &str, status: InmateStatus, block: &str) -> Inmate {
    Inmate {
        id: RecordId::unassigned(),
        inmate_number: number.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: date(1985, 3, 15),
        admission_date: date(2023, 1, 15),
        expected_release_date: date(2030, 6, 15),
        cell_number: format!("{}-101", block),
        block: block.to_string(),
        status,
        crime_type: "Theft".to_string(),
        sentence: "2 years".to_string(),
        emergency_contact: EmergencyContact {
            name: "Jane Doe".to_string(),
            relationship: "Sister".to_string(),
            phone: "+1234567890".to_string(),
        },
    }
}

/// An inmate draft with a specific expected release date.
pub fn inmate_releasing(number: &str, status: InmateStatus, release: NaiveDate) -> Inmate {
    let mut draft = inmate(number, "Test", "Subject", status, "A");
    draft.expected_release_date = release;
    draft
}

pub fn staff_member(
    employee_id: &str,
    first: &str,
    last: &str,
    position: &str,
    department: &str,
    shift: Shift,
    status: StaffStatus,
) -> Staff {
    Staff {
        id: RecordId::unassigned(),
        employee_id: employee_id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        hire_date: date(2020, 3, 15),
        shift,
        status,
        contact_info: ContactInfo {
            email: format!("{}.{}@facility.gov", first.to_lowercase(), last.to_lowercase()),
            phone: "+1234567890".to_string(),
        },
    }
}

pub fn visitor(
    first: &str,
    last: &str,
    relationship: &str,
    status: VisitorStatus,
    last_visit: Option<NaiveDate>,
    inmate_id: RecordId,
) -> Visitor {
    Visitor {
        id: RecordId::unassigned(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        relationship: relationship.to_string(),
        contact_info: ContactInfo {
            email: format!("{}.{}@email.com", first.to_lowercase(), last.to_lowercase()),
            phone: "+1234567890".to_string(),
        },
        last_visit,
        inmate_id,
        status,
    }
}

pub fn medical_record(inmate_id: RecordId, kind: MedicalRecordKind, on: NaiveDate) -> MedicalRecord {
    MedicalRecord {
        id: RecordId::unassigned(),
        inmate_id,
        date: on,
        kind,
        description: "Visit".to_string(),
        doctor: "Dr. Brown".to_string(),
        medications: vec![],
        next_appointment: None,
    }
}

pub fn incident(
    kind: IncidentKind,
    severity: Severity,
    status: IncidentStatus,
    on: NaiveDate,
) -> SecurityIncident {
    SecurityIncident {
        id: RecordId::unassigned(),
        kind,
        description: "Incident".to_string(),
        location: "Yard".to_string(),
        date: on,
        time: time(14, 30),
        severity,
        status,
        reported_by: "Officer Wilson".to_string(),
        involved_inmates: vec![],
    }
}

pub fn supply_item(name: &str, category: SupplyCategory, status: SupplyStatus) -> SupplyItem {
    SupplyItem {
        id: RecordId::unassigned(),
        name: name.to_string(),
        category,
        quantity: 10,
        unit: "units".to_string(),
        location: "Storage".to_string(),
        status,
        last_updated: date(2024, 1, 15),
    }
}
