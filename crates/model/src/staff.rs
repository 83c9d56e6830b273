//! Staff records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::contact::ContactInfo;
use crate::id::RecordId;
use crate::record::{Record, RecordKind};

/// Work shift assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Day shift.
    Day,
    /// Night shift.
    Night,
    /// Rotating schedule.
    Rotating,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Day => write!(f, "day"),
            Shift::Night => write!(f, "night"),
            Shift::Rotating => write!(f, "rotating"),
        }
    }
}

impl FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Shift::Day),
            "night" => Ok(Shift::Night),
            "rotating" => Ok(Shift::Rotating),
            _ => Err(format!("unknown shift: {}", s)),
        }
    }
}

/// Employment status of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffStatus {
    /// Currently employed.
    Active,
    /// No longer active.
    Inactive,
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffStatus::Active => write!(f, "active"),
            StaffStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for StaffStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(StaffStatus::Active),
            "inactive" => Ok(StaffStatus::Inactive),
            _ => Err(format!("unknown staff status: {}", s)),
        }
    }
}

/// A facility employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Employee number (e.g., "EMP001").
    pub employee_id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Job title.
    pub position: String,
    /// Department name. May be empty for unassigned staff.
    pub department: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Shift assignment.
    pub shift: Shift,
    /// Employment status.
    pub status: StaffStatus,
    /// Contact information.
    pub contact_info: ContactInfo,
}

impl Staff {
    /// Returns "first last" as a single display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial update for a [`Staff`] record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffPatch {
    /// New employee number.
    pub employee_id: Option<String>,
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New job title.
    pub position: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New hire date.
    pub hire_date: Option<NaiveDate>,
    /// New shift assignment.
    pub shift: Option<Shift>,
    /// New employment status.
    pub status: Option<StaffStatus>,
    /// New contact information.
    pub contact_info: Option<ContactInfo>,
}

impl Record for Staff {
    type Patch = StaffPatch;

    const KIND: RecordKind = RecordKind::Staff;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: StaffPatch) {
        if let Some(employee_id) = patch.employee_id {
            self.employee_id = employee_id;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(hire_date) = patch.hire_date {
            self.hire_date = hire_date;
        }
        if let Some(shift) = patch.shift {
            self.shift = shift;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(contact_info) = patch.contact_info {
            self.contact_info = contact_info;
        }
    }
}
