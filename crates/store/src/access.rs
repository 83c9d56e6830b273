//! The permission gate.
//!
//! The store itself performs no access control; consumers run behind a
//! gate that exposes whether a user is signed in and which sections of
//! the back office their role grants. This module is that gate's typed
//! realization: roles, sections, an allow-set [`Permissions`] type, and
//! the check predicate. Credential handling (passwords, sessions) is
//! deliberately absent.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// Sections of the back office that can be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Inmate management.
    Inmates,
    /// Staff management.
    Staff,
    /// Visitor management.
    Visitors,
    /// Medical records.
    Medical,
    /// Security incidents.
    Security,
    /// Supply tracking.
    Resources,
    /// Report generation.
    Reports,
    /// Data export and import.
    Data,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Inmates => write!(f, "inmates"),
            Section::Staff => write!(f, "staff"),
            Section::Visitors => write!(f, "visitors"),
            Section::Medical => write!(f, "medical"),
            Section::Security => write!(f, "security"),
            Section::Resources => write!(f, "resources"),
            Section::Reports => write!(f, "reports"),
            Section::Data => write!(f, "data"),
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inmates" => Ok(Section::Inmates),
            "staff" => Ok(Section::Staff),
            "visitors" => Ok(Section::Visitors),
            "medical" => Ok(Section::Medical),
            "security" => Ok(Section::Security),
            "resources" => Ok(Section::Resources),
            "reports" => Ok(Section::Reports),
            "data" => Ok(Section::Data),
            _ => Err(format!("unknown section: {}", s)),
        }
    }
}

/// User roles and their section grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to every section.
    Admin,
    /// Facility management.
    Warden,
    /// Line security staff.
    Officer,
    /// Medical staff.
    Medical,
}

impl Role {
    /// Returns the sections this role grants.
    pub fn grants(&self) -> Vec<Section> {
        match self {
            Role::Admin => vec![
                Section::Inmates,
                Section::Staff,
                Section::Visitors,
                Section::Medical,
                Section::Security,
                Section::Resources,
                Section::Reports,
                Section::Data,
            ],
            Role::Warden => vec![
                Section::Inmates,
                Section::Staff,
                Section::Security,
                Section::Reports,
            ],
            Role::Officer => vec![Section::Inmates, Section::Visitors, Section::Security],
            Role::Medical => vec![Section::Medical, Section::Inmates],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Warden => write!(f, "warden"),
            Role::Officer => write!(f, "officer"),
            Role::Medical => write!(f, "medical"),
        }
    }
}

/// Sections granted to a signed-in user.
///
/// # Examples
///
/// ```
/// use warden_store::access::{Permissions, Role, Section};
///
/// let full = Permissions::full_access();
/// assert!(full.allows(Section::Medical));
///
/// let officer = Permissions::for_role(Role::Officer);
/// assert!(officer.allows(Section::Security));
/// assert!(!officer.allows(Section::Medical));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permissions {
    /// Granted sections. `None` grants everything.
    granted: Option<HashSet<Section>>,
}

impl Permissions {
    /// Grants every section.
    pub fn full_access() -> Self {
        Self { granted: None }
    }

    /// Grants exactly the given sections.
    pub fn for_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            granted: Some(sections.into_iter().collect()),
        }
    }

    /// Grants the sections of the given role.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::full_access(),
            _ => Self::for_sections(role.grants()),
        }
    }

    /// Returns `true` if the section is granted.
    pub fn allows(&self, section: Section) -> bool {
        match &self.granted {
            None => true,
            Some(granted) => granted.contains(&section),
        }
    }

    /// Checks that the section is granted.
    pub fn check(&self, section: Section) -> Result<(), AccessError> {
        if self.allows(section) {
            Ok(())
        } else {
            Err(AccessError::Denied { section })
        }
    }
}

/// The gate consumers sit behind: an optional signed-in user with
/// permissions.
///
/// How the user got signed in is out of scope; the gate only answers
/// `is_authenticated` and permission checks.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    user: Option<ActiveUser>,
}

/// The signed-in user held by the gate.
#[derive(Debug, Clone)]
pub struct ActiveUser {
    /// Display name.
    pub name: String,
    /// The user's role.
    pub role: Role,
    /// The user's permissions.
    pub permissions: Permissions,
}

impl AccessGate {
    /// Creates a gate with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a gate for a user with the grants of the given role.
    pub fn for_user(name: impl Into<String>, role: Role) -> Self {
        Self {
            user: Some(ActiveUser {
                name: name.into(),
                role,
                permissions: Permissions::for_role(role),
            }),
        }
    }

    /// Returns `true` if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<&ActiveUser> {
        self.user.as_ref()
    }

    /// Checks that a user is signed in and granted the section.
    pub fn check(&self, section: Section) -> Result<(), AccessError> {
        match &self.user {
            None => Err(AccessError::NotAuthenticated),
            Some(user) => user.permissions.check(section),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_access_allows_everything() {
        let perms = Permissions::full_access();
        assert!(perms.allows(Section::Inmates));
        assert!(perms.allows(Section::Data));
    }

    #[test]
    fn test_role_grants() {
        let warden = Permissions::for_role(Role::Warden);
        assert!(warden.allows(Section::Reports));
        assert!(!warden.allows(Section::Medical));

        let medical = Permissions::for_role(Role::Medical);
        assert!(medical.allows(Section::Medical));
        assert!(medical.allows(Section::Inmates));
        assert!(!medical.allows(Section::Security));
    }

    #[test]
    fn test_check_denied() {
        let officer = Permissions::for_role(Role::Officer);
        assert!(officer.check(Section::Security).is_ok());
        assert!(matches!(
            officer.check(Section::Data),
            Err(AccessError::Denied { section: Section::Data })
        ));
    }

    #[test]
    fn test_gate_requires_sign_in() {
        let gate = AccessGate::anonymous();
        assert!(!gate.is_authenticated());
        assert!(matches!(
            gate.check(Section::Inmates),
            Err(AccessError::NotAuthenticated)
        ));

        let gate = AccessGate::for_user("Officer Smith", Role::Officer);
        assert!(gate.is_authenticated());
        assert!(gate.check(Section::Visitors).is_ok());
        assert!(gate.check(Section::Medical).is_err());
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("reports".parse::<Section>(), Ok(Section::Reports));
        assert!("kitchen".parse::<Section>().is_err());
    }
}
