//! Warden Record Model
//!
//! This crate defines the record types managed by the Warden facility back
//! office: inmates, staff, visitors, medical records, security incidents,
//! and supply items. Every record is a flat struct with an opaque
//! [`RecordId`] assigned at creation time, and every categorical field is a
//! closed enum so that invalid values are rejected at construction rather
//! than silently rendered.
//!
//! # Records and patches
//!
//! Each record kind comes with a patch type of all-optional fields
//! realizing partial updates: a patch carries only the fields to change,
//! and [`Record::apply`] merges them into an existing record. The
//! [`Record`] trait ties a record to its patch and is the seam the store's
//! generic collection is built over.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use warden_model::{Inmate, InmatePatch, InmateStatus, EmergencyContact, Record, RecordId};
//!
//! let mut inmate = Inmate {
//!     id: RecordId::unassigned(),
//!     inmate_number: "INM001".to_string(),
//!     first_name: "John".to_string(),
//!     last_name: "Doe".to_string(),
//!     date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
//!     admission_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
//!     expected_release_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
//!     cell_number: "A-101".to_string(),
//!     block: "A".to_string(),
//!     status: InmateStatus::Active,
//!     crime_type: "Theft".to_string(),
//!     sentence: "2 years".to_string(),
//!     emergency_contact: EmergencyContact {
//!         name: "Jane Doe".to_string(),
//!         relationship: "Sister".to_string(),
//!         phone: "+1234567890".to_string(),
//!     },
//! };
//!
//! inmate.apply(InmatePatch {
//!     status: Some(InmateStatus::Released),
//!     ..InmatePatch::default()
//! });
//! assert_eq!(inmate.status, InmateStatus::Released);
//! ```
//!
//! # Relationships
//!
//! Records reference each other by id only (`Visitor::inmate_id`,
//! `MedicalRecord::inmate_id`, `SecurityIncident::involved_inmates`).
//! There is no referential-integrity enforcement: deleting an inmate does
//! not cascade to records that reference it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod contact;
mod id;
mod incident;
mod inmate;
mod medical;
mod record;
mod staff;
mod supply;
mod visitor;

pub use contact::{ContactInfo, EmergencyContact};
pub use id::RecordId;
pub use incident::{
    IncidentKind, IncidentStatus, SecurityIncident, SecurityIncidentPatch, Severity,
};
pub use inmate::{Inmate, InmatePatch, InmateStatus};
pub use medical::{MedicalRecord, MedicalRecordKind, MedicalRecordPatch};
pub use record::{Record, RecordKind};
pub use staff::{Shift, Staff, StaffPatch, StaffStatus};
pub use supply::{SupplyCategory, SupplyItem, SupplyItemPatch, SupplyStatus};
pub use visitor::{Visitor, VisitorPatch, VisitorStatus};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
