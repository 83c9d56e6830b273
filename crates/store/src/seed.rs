//! Demo seed data.
//!
//! A small, realistic dataset so a consumer can exercise every derived
//! read without entering records first. Seed ids are fixed strings so the
//! cross-record references stay consistent.

use chrono::{NaiveDate, NaiveTime};

use warden_model::{
    ContactInfo, EmergencyContact, IncidentKind, IncidentStatus, Inmate, InmateStatus,
    MedicalRecord, MedicalRecordKind, RecordId, SecurityIncident, Severity, Shift, Staff,
    StaffStatus, SupplyCategory, SupplyItem, SupplyStatus, Visitor, VisitorStatus,
};

use crate::collection::Collection;
use crate::store::FacilityStore;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

fn seed_inmates() -> Vec<Inmate> {
    vec![
        Inmate {
            id: RecordId::new("inm-001"),
            inmate_number: "INM001".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: date(1985, 3, 15),
            admission_date: date(2023, 1, 15),
            expected_release_date: date(2025, 6, 15),
            cell_number: "A-101".to_string(),
            block: "A".to_string(),
            status: InmateStatus::Active,
            crime_type: "Theft".to_string(),
            sentence: "2 years".to_string(),
            emergency_contact: EmergencyContact {
                name: "Jane Doe".to_string(),
                relationship: "Sister".to_string(),
                phone: "+1234567890".to_string(),
            },
        },
        Inmate {
            id: RecordId::new("inm-002"),
            inmate_number: "INM002".to_string(),
            first_name: "Mike".to_string(),
            last_name: "Smith".to_string(),
            date_of_birth: date(1990, 7, 22),
            admission_date: date(2023, 6, 10),
            expected_release_date: date(2026, 12, 10),
            cell_number: "B-205".to_string(),
            block: "B".to_string(),
            status: InmateStatus::Active,
            crime_type: "Assault".to_string(),
            sentence: "3.5 years".to_string(),
            emergency_contact: EmergencyContact {
                name: "Sarah Smith".to_string(),
                relationship: "Mother".to_string(),
                phone: "+1987654321".to_string(),
            },
        },
        Inmate {
            id: RecordId::new("inm-003"),
            inmate_number: "INM003".to_string(),
            first_name: "Robert".to_string(),
            last_name: "Johnson".to_string(),
            date_of_birth: date(1982, 11, 8),
            admission_date: date(2022, 9, 20),
            expected_release_date: date(2025, 3, 20),
            cell_number: "C-312".to_string(),
            block: "C".to_string(),
            status: InmateStatus::Active,
            crime_type: "Drug Possession".to_string(),
            sentence: "2.5 years".to_string(),
            emergency_contact: EmergencyContact {
                name: "Lisa Johnson".to_string(),
                relationship: "Wife".to_string(),
                phone: "+1122334455".to_string(),
            },
        },
    ]
}

fn seed_staff() -> Vec<Staff> {
    vec![
        Staff {
            id: RecordId::new("stf-001"),
            employee_id: "EMP001".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            position: "Security Officer".to_string(),
            department: "Security".to_string(),
            hire_date: date(2020, 3, 15),
            shift: Shift::Day,
            status: StaffStatus::Active,
            contact_info: ContactInfo {
                email: "sarah.wilson@facility.gov".to_string(),
                phone: "+1234567890".to_string(),
            },
        },
        Staff {
            id: RecordId::new("stf-002"),
            employee_id: "EMP002".to_string(),
            first_name: "David".to_string(),
            last_name: "Brown".to_string(),
            position: "Medical Officer".to_string(),
            department: "Medical".to_string(),
            hire_date: date(2019, 8, 22),
            shift: Shift::Day,
            status: StaffStatus::Active,
            contact_info: ContactInfo {
                email: "david.brown@facility.gov".to_string(),
                phone: "+1987654321".to_string(),
            },
        },
        Staff {
            id: RecordId::new("stf-003"),
            employee_id: "EMP003".to_string(),
            first_name: "Lisa".to_string(),
            last_name: "Davis".to_string(),
            position: "Warden".to_string(),
            department: "Administration".to_string(),
            hire_date: date(2018, 1, 10),
            shift: Shift::Day,
            status: StaffStatus::Active,
            contact_info: ContactInfo {
                email: "lisa.davis@facility.gov".to_string(),
                phone: "+1122334455".to_string(),
            },
        },
    ]
}

fn seed_visitors() -> Vec<Visitor> {
    vec![Visitor {
        id: RecordId::new("vis-001"),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        relationship: "Sister".to_string(),
        contact_info: ContactInfo {
            email: "jane.doe@email.com".to_string(),
            phone: "+1234567890".to_string(),
        },
        last_visit: Some(date(2024, 1, 15)),
        inmate_id: RecordId::new("inm-001"),
        status: VisitorStatus::Approved,
    }]
}

fn seed_medical_records() -> Vec<MedicalRecord> {
    vec![MedicalRecord {
        id: RecordId::new("med-001"),
        inmate_id: RecordId::new("inm-001"),
        date: date(2024, 1, 15),
        kind: MedicalRecordKind::Checkup,
        description: "Routine health checkup".to_string(),
        doctor: "Dr. Brown".to_string(),
        medications: vec!["Vitamin D".to_string()],
        next_appointment: Some(date(2024, 4, 15)),
    }]
}

fn seed_security_incidents() -> Vec<SecurityIncident> {
    vec![SecurityIncident {
        id: RecordId::new("inc-001"),
        kind: IncidentKind::Fight,
        description: "Altercation in cafeteria".to_string(),
        location: "Cafeteria".to_string(),
        date: date(2024, 1, 10),
        time: time(14, 30),
        severity: Severity::Medium,
        status: IncidentStatus::Resolved,
        reported_by: "Officer Wilson".to_string(),
        involved_inmates: vec![RecordId::new("inm-001"), RecordId::new("inm-002")],
    }]
}

fn seed_supply_items() -> Vec<SupplyItem> {
    vec![SupplyItem {
        id: RecordId::new("sup-001"),
        name: "Security Cameras".to_string(),
        category: SupplyCategory::Security,
        quantity: 45,
        unit: "units".to_string(),
        location: "Various".to_string(),
        status: SupplyStatus::Available,
        last_updated: date(2024, 1, 15),
    }]
}

impl FacilityStore {
    /// Creates a store pre-loaded with the demo dataset.
    pub fn with_seed_data() -> Self {
        let store = Self {
            inmates: Collection::from_records(seed_inmates()),
            staff: Collection::from_records(seed_staff()),
            visitors: Collection::from_records(seed_visitors()),
            medical_records: Collection::from_records(seed_medical_records()),
            security_incidents: Collection::from_records(seed_security_incidents()),
            supply_items: Collection::from_records(seed_supply_items()),
        };
        tracing::info!(
            inmates = store.inmates.len(),
            staff = store.staff.len(),
            visitors = store.visitors.len(),
            "seed data loaded"
        );
        store
    }
}
