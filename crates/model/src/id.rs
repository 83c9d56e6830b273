//! Record identifier type.
//!
//! This module defines [`RecordId`], the opaque identifier assigned to
//! every stored record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An opaque record identifier.
///
/// Identifiers are generated by the store when a record is added and are
/// never reused. Callers constructing a record for insertion use
/// [`RecordId::unassigned`] as the placeholder; the store replaces it with
/// a freshly generated id.
///
/// # Examples
///
/// ```
/// use warden_model::RecordId;
///
/// let id = RecordId::generate();
/// assert!(!id.as_str().is_empty());
///
/// let draft = RecordId::unassigned();
/// assert!(draft.is_unassigned());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a record id from the given string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, globally unique record id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the placeholder id for a record that has not been stored yet.
    pub fn unassigned() -> Self {
        Self(String::new())
    }

    /// Returns `true` if this is the unassigned placeholder.
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RecordId::new(s))
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::new(s)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::new(s)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
