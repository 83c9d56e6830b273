//! Security incident records.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::record::{Record, RecordKind};

/// Category of a security incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    /// Physical altercation between inmates.
    Fight,
    /// Contraband discovery.
    Contraband,
    /// Escape attempt.
    EscapeAttempt,
    /// Any other incident.
    Other,
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentKind::Fight => write!(f, "fight"),
            IncidentKind::Contraband => write!(f, "contraband"),
            IncidentKind::EscapeAttempt => write!(f, "escape_attempt"),
            IncidentKind::Other => write!(f, "other"),
        }
    }
}

impl FromStr for IncidentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fight" => Ok(IncidentKind::Fight),
            "contraband" => Ok(IncidentKind::Contraband),
            "escape_attempt" => Ok(IncidentKind::EscapeAttempt),
            "other" => Ok(IncidentKind::Other),
            _ => Err(format!("unknown incident kind: {}", s)),
        }
    }
}

/// Severity of a security incident.
///
/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Minor incident.
    Low,
    /// Moderate incident.
    Medium,
    /// Serious incident.
    High,
    /// Critical incident requiring immediate attention.
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// Resolution status of a security incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    /// Newly reported, not yet worked.
    Open,
    /// Under investigation.
    Investigating,
    /// Closed.
    Resolved,
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentStatus::Open => write!(f, "open"),
            IncidentStatus::Investigating => write!(f, "investigating"),
            IncidentStatus::Resolved => write!(f, "resolved"),
        }
    }
}

impl FromStr for IncidentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(IncidentStatus::Open),
            "investigating" => Ok(IncidentStatus::Investigating),
            "resolved" => Ok(IncidentStatus::Resolved),
            _ => Err(format!("unknown incident status: {}", s)),
        }
    }
}

/// A reported security incident.
///
/// Involved inmates are referenced by id only; display names are resolved
/// live by the store so later renames are always reflected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityIncident {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Incident category.
    pub kind: IncidentKind,
    /// Free-text description.
    pub description: String,
    /// Where the incident occurred.
    pub location: String,
    /// Date of the incident.
    pub date: NaiveDate,
    /// Time of day of the incident.
    pub time: NaiveTime,
    /// Severity classification.
    pub severity: Severity,
    /// Resolution status.
    pub status: IncidentStatus,
    /// Who reported the incident.
    pub reported_by: String,
    /// Ids of inmates involved.
    pub involved_inmates: Vec<RecordId>,
}

/// Partial update for a [`SecurityIncident`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityIncidentPatch {
    /// New incident category.
    pub kind: Option<IncidentKind>,
    /// New description.
    pub description: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New incident date.
    pub date: Option<NaiveDate>,
    /// New incident time.
    pub time: Option<NaiveTime>,
    /// New severity.
    pub severity: Option<Severity>,
    /// New resolution status.
    pub status: Option<IncidentStatus>,
    /// New reporter.
    pub reported_by: Option<String>,
    /// New involved-inmate list (replaces the previous list).
    pub involved_inmates: Option<Vec<RecordId>>,
}

impl Record for SecurityIncident {
    type Patch = SecurityIncidentPatch;

    const KIND: RecordKind = RecordKind::SecurityIncident;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: SecurityIncidentPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(severity) = patch.severity {
            self.severity = severity;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(reported_by) = patch.reported_by {
            self.reported_by = reported_by;
        }
        if let Some(involved_inmates) = patch.involved_inmates {
            self.involved_inmates = involved_inmates;
        }
    }
}
