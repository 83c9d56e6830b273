//! The record trait and record-kind enum.
//!
//! This module defines the [`Record`] trait implemented by every record
//! type, and [`RecordKind`], the discriminant used in error reporting and
//! logging.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// The six record kinds managed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// An incarcerated person.
    Inmate,
    /// A facility employee.
    Staff,
    /// A registered visitor.
    Visitor,
    /// A medical visit record.
    MedicalRecord,
    /// A security incident report.
    SecurityIncident,
    /// A tracked supply item.
    SupplyItem,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Inmate => write!(f, "inmate"),
            RecordKind::Staff => write!(f, "staff"),
            RecordKind::Visitor => write!(f, "visitor"),
            RecordKind::MedicalRecord => write!(f, "medical_record"),
            RecordKind::SecurityIncident => write!(f, "security_incident"),
            RecordKind::SupplyItem => write!(f, "supply_item"),
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inmate" => Ok(RecordKind::Inmate),
            "staff" => Ok(RecordKind::Staff),
            "visitor" => Ok(RecordKind::Visitor),
            "medical_record" => Ok(RecordKind::MedicalRecord),
            "security_incident" => Ok(RecordKind::SecurityIncident),
            "supply_item" => Ok(RecordKind::SupplyItem),
            _ => Err(format!("unknown record kind: {}", s)),
        }
    }
}

/// A stored record: identified by a [`RecordId`] and updatable through a
/// typed patch.
///
/// The patch type carries only the fields to change; [`Record::apply`]
/// merges them into the record. An empty patch leaves the record unchanged.
pub trait Record {
    /// The partial-update type for this record kind.
    type Patch;

    /// The kind discriminant for this record type.
    const KIND: RecordKind;

    /// Returns the record's id.
    fn id(&self) -> &RecordId;

    /// Replaces the record's id.
    ///
    /// Called by the store when the record is added; any caller-supplied
    /// id is discarded at that point.
    fn set_id(&mut self, id: RecordId);

    /// Merges the supplied patch fields into this record.
    fn apply(&mut self, patch: Self::Patch);
}
