//! Shared contact types.

use serde::{Deserialize, Serialize};

/// An emergency contact for an inmate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Contact's full name.
    pub name: String,
    /// Relationship to the inmate.
    pub relationship: String,
    /// Contact phone number.
    pub phone: String,
}

/// Contact information for staff and visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
}
