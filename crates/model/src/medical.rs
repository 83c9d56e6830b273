//! Medical visit records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::record::{Record, RecordKind};

/// Category of a medical visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalRecordKind {
    /// Routine examination.
    Checkup,
    /// Ongoing treatment.
    Treatment,
    /// Emergency care.
    Emergency,
    /// Medication dispensing or review.
    Medication,
}

impl fmt::Display for MedicalRecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedicalRecordKind::Checkup => write!(f, "checkup"),
            MedicalRecordKind::Treatment => write!(f, "treatment"),
            MedicalRecordKind::Emergency => write!(f, "emergency"),
            MedicalRecordKind::Medication => write!(f, "medication"),
        }
    }
}

impl FromStr for MedicalRecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checkup" => Ok(MedicalRecordKind::Checkup),
            "treatment" => Ok(MedicalRecordKind::Treatment),
            "emergency" => Ok(MedicalRecordKind::Emergency),
            "medication" => Ok(MedicalRecordKind::Medication),
            _ => Err(format!("unknown medical record kind: {}", s)),
        }
    }
}

/// A medical visit record for one inmate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// The inmate this record belongs to.
    pub inmate_id: RecordId,
    /// Visit date.
    pub date: NaiveDate,
    /// Visit category.
    pub kind: MedicalRecordKind,
    /// Free-text description.
    pub description: String,
    /// Attending doctor.
    pub doctor: String,
    /// Medication names prescribed or reviewed.
    pub medications: Vec<String>,
    /// Next scheduled appointment, if any.
    pub next_appointment: Option<NaiveDate>,
}

/// Partial update for a [`MedicalRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalRecordPatch {
    /// New inmate reference.
    pub inmate_id: Option<RecordId>,
    /// New visit date.
    pub date: Option<NaiveDate>,
    /// New visit category.
    pub kind: Option<MedicalRecordKind>,
    /// New description.
    pub description: Option<String>,
    /// New attending doctor.
    pub doctor: Option<String>,
    /// New medication list (replaces the previous list).
    pub medications: Option<Vec<String>>,
    /// New next-appointment date.
    pub next_appointment: Option<NaiveDate>,
}

impl Record for MedicalRecord {
    type Patch = MedicalRecordPatch;

    const KIND: RecordKind = RecordKind::MedicalRecord;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: MedicalRecordPatch) {
        if let Some(inmate_id) = patch.inmate_id {
            self.inmate_id = inmate_id;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(doctor) = patch.doctor {
            self.doctor = doctor;
        }
        if let Some(medications) = patch.medications {
            self.medications = medications;
        }
        if let Some(next_appointment) = patch.next_appointment {
            self.next_appointment = Some(next_appointment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            "emergency".parse::<MedicalRecordKind>(),
            Ok(MedicalRecordKind::Emergency)
        );
        assert!("dental".parse::<MedicalRecordKind>().is_err());
    }

    #[test]
    fn test_patch_replaces_medication_list() {
        let mut record = MedicalRecord {
            id: RecordId::new("med-1"),
            inmate_id: RecordId::new("inm-1"),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            kind: MedicalRecordKind::Checkup,
            description: "Routine health checkup".to_string(),
            doctor: "Dr. Brown".to_string(),
            medications: vec!["Vitamin D".to_string()],
            next_appointment: None,
        };

        record.apply(MedicalRecordPatch {
            medications: Some(vec!["Ibuprofen".to_string(), "Vitamin D".to_string()]),
            ..MedicalRecordPatch::default()
        });

        assert_eq!(record.medications.len(), 2);
        assert_eq!(record.kind, MedicalRecordKind::Checkup);
    }
}
