//! Visitor records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::contact::ContactInfo;
use crate::id::RecordId;
use crate::record::{Record, RecordKind};

/// Approval status of a visitor registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorStatus {
    /// Cleared for visits.
    Approved,
    /// Awaiting review.
    Pending,
    /// Visit privileges denied.
    Denied,
}

impl fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitorStatus::Approved => write!(f, "approved"),
            VisitorStatus::Pending => write!(f, "pending"),
            VisitorStatus::Denied => write!(f, "denied"),
        }
    }
}

impl FromStr for VisitorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approved" => Ok(VisitorStatus::Approved),
            "pending" => Ok(VisitorStatus::Pending),
            "denied" => Ok(VisitorStatus::Denied),
            _ => Err(format!("unknown visitor status: {}", s)),
        }
    }
}

/// A registered visitor.
///
/// References exactly one inmate by id. The reference is not validated:
/// deleting the inmate leaves the visitor record in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Relationship to the inmate (e.g., "Sister").
    pub relationship: String,
    /// Contact information.
    pub contact_info: ContactInfo,
    /// Date of the most recent visit, if any.
    pub last_visit: Option<NaiveDate>,
    /// The inmate this visitor is registered for.
    pub inmate_id: RecordId,
    /// Approval status.
    pub status: VisitorStatus,
}

impl Visitor {
    /// Returns "first last" as a single display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial update for a [`Visitor`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitorPatch {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New relationship.
    pub relationship: Option<String>,
    /// New contact information.
    pub contact_info: Option<ContactInfo>,
    /// New last-visit date.
    pub last_visit: Option<NaiveDate>,
    /// New inmate reference.
    pub inmate_id: Option<RecordId>,
    /// New approval status.
    pub status: Option<VisitorStatus>,
}

impl Record for Visitor {
    type Patch = VisitorPatch;

    const KIND: RecordKind = RecordKind::Visitor;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: VisitorPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(relationship) = patch.relationship {
            self.relationship = relationship;
        }
        if let Some(contact_info) = patch.contact_info {
            self.contact_info = contact_info;
        }
        if let Some(last_visit) = patch.last_visit {
            self.last_visit = Some(last_visit);
        }
        if let Some(inmate_id) = patch.inmate_id {
            self.inmate_id = inmate_id;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
