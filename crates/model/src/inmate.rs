//! Inmate records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::contact::EmergencyContact;
use crate::id::RecordId;
use crate::record::{Record, RecordKind};

/// Lifecycle status of an inmate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InmateStatus {
    /// Currently incarcerated at the facility.
    Active,
    /// Sentence completed, no longer at the facility.
    Released,
    /// Moved to another facility.
    Transferred,
}

impl fmt::Display for InmateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InmateStatus::Active => write!(f, "active"),
            InmateStatus::Released => write!(f, "released"),
            InmateStatus::Transferred => write!(f, "transferred"),
        }
    }
}

impl FromStr for InmateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(InmateStatus::Active),
            "released" => Ok(InmateStatus::Released),
            "transferred" => Ok(InmateStatus::Transferred),
            _ => Err(format!("unknown inmate status: {}", s)),
        }
    }
}

/// An incarcerated person.
///
/// `expected_release_date` is informational only: no ordering against
/// `admission_date` is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inmate {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Facility inmate number (e.g., "INM001").
    pub inmate_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Date of admission to the facility.
    pub admission_date: NaiveDate,
    /// Expected release date.
    pub expected_release_date: NaiveDate,
    /// Cell number (e.g., "A-101").
    pub cell_number: String,
    /// Cell block letter. May be empty for unassigned inmates.
    pub block: String,
    /// Lifecycle status.
    pub status: InmateStatus,
    /// Crime category description.
    pub crime_type: String,
    /// Sentence description.
    pub sentence: String,
    /// Emergency contact.
    pub emergency_contact: EmergencyContact,
}

impl Inmate {
    /// Returns "first last" as a single display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial update for an [`Inmate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InmatePatch {
    /// New inmate number.
    pub inmate_number: Option<String>,
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// New admission date.
    pub admission_date: Option<NaiveDate>,
    /// New expected release date.
    pub expected_release_date: Option<NaiveDate>,
    /// New cell number.
    pub cell_number: Option<String>,
    /// New cell block.
    pub block: Option<String>,
    /// New lifecycle status.
    pub status: Option<InmateStatus>,
    /// New crime category.
    pub crime_type: Option<String>,
    /// New sentence description.
    pub sentence: Option<String>,
    /// New emergency contact.
    pub emergency_contact: Option<EmergencyContact>,
}

impl Record for Inmate {
    type Patch = InmatePatch;

    const KIND: RecordKind = RecordKind::Inmate;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: InmatePatch) {
        if let Some(inmate_number) = patch.inmate_number {
            self.inmate_number = inmate_number;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(admission_date) = patch.admission_date {
            self.admission_date = admission_date;
        }
        if let Some(expected_release_date) = patch.expected_release_date {
            self.expected_release_date = expected_release_date;
        }
        if let Some(cell_number) = patch.cell_number {
            self.cell_number = cell_number;
        }
        if let Some(block) = patch.block {
            self.block = block;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(crime_type) = patch.crime_type {
            self.crime_type = crime_type;
        }
        if let Some(sentence) = patch.sentence {
            self.sentence = sentence;
        }
        if let Some(emergency_contact) = patch.emergency_contact {
            self.emergency_contact = emergency_contact;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inmate {
        Inmate {
            id: RecordId::new("inm-1"),
            inmate_number: "INM001".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
            admission_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            expected_release_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
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
        }
    }

    #[test]
    fn test_status_display_and_parse() {
        assert_eq!(InmateStatus::Active.to_string(), "active");
        assert_eq!("released".parse::<InmateStatus>(), Ok(InmateStatus::Released));
        assert!("paroled".parse::<InmateStatus>().is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "John Doe");
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut inmate = sample();
        let before = inmate.clone();
        inmate.apply(InmatePatch::default());
        assert_eq!(inmate, before);
    }

    #[test]
    fn test_patch_merges_supplied_fields_only() {
        let mut inmate = sample();
        inmate.apply(InmatePatch {
            status: Some(InmateStatus::Transferred),
            block: Some("D".to_string()),
            ..InmatePatch::default()
        });
        assert_eq!(inmate.status, InmateStatus::Transferred);
        assert_eq!(inmate.block, "D");
        // Untouched fields keep their values.
        assert_eq!(inmate.first_name, "John");
        assert_eq!(inmate.cell_number, "A-101");
    }

    #[test]
    fn test_serde_status_rename() {
        let json = serde_json::to_string(&InmateStatus::Transferred).unwrap();
        assert_eq!(json, "\"transferred\"");
    }
}
