//! Search and filter predicates.
//!
//! Read-only queries over the inmate, staff, and visitor collections.
//! Every predicate is a pure function of (snapshot, arguments): no
//! mutation, deterministic, and total. No matches yields an empty
//! sequence, never an error.

use serde::Serialize;

use warden_model::{Inmate, InmateStatus, Staff, Visitor};

use crate::store::FacilityStore;

/// Per-kind results of a cross-collection search.
///
/// Each collection is matched independently; there is no ranking or
/// cross-kind relevance ordering.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    /// Matching inmates.
    pub inmates: Vec<Inmate>,
    /// Matching staff.
    pub staff: Vec<Staff>,
    /// Matching visitors.
    pub visitors: Vec<Visitor>,
}

impl SearchResults {
    /// Returns the total number of matches across all kinds.
    pub fn total(&self) -> usize {
        self.inmates.len() + self.staff.len() + self.visitors.len()
    }
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl FacilityStore {
    /// Searches inmates by name or inmate number.
    ///
    /// Case-insensitive substring match against the "first last"
    /// concatenation or the inmate number. An empty query matches every
    /// record, so the full collection is returned.
    pub fn search_inmates(&self, query: &str) -> Vec<Inmate> {
        let needle = query.to_lowercase();
        self.inmates
            .snapshot()
            .iter()
            .filter(|inmate| {
                matches(&inmate.full_name(), &needle) || matches(&inmate.inmate_number, &needle)
            })
            .cloned()
            .collect()
    }

    /// Filters inmates by exact status and/or block.
    ///
    /// Omitted criteria are not applied; supplied criteria combine with
    /// logical AND.
    pub fn filter_inmates(&self, status: Option<InmateStatus>, block: Option<&str>) -> Vec<Inmate> {
        self.inmates
            .snapshot()
            .iter()
            .filter(|inmate| {
                if let Some(status) = status {
                    if inmate.status != status {
                        return false;
                    }
                }
                if let Some(block) = block {
                    if inmate.block != block {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Searches inmates, staff, and visitors in one pass.
    ///
    /// Inmates match on name or inmate number; staff on name, employee id,
    /// or position; visitors on name or relationship. Each collection is
    /// matched independently.
    pub fn search_all(&self, query: &str) -> SearchResults {
        let needle = query.to_lowercase();

        let inmates = self
            .inmates
            .snapshot()
            .iter()
            .filter(|inmate| {
                matches(&inmate.full_name(), &needle) || matches(&inmate.inmate_number, &needle)
            })
            .cloned()
            .collect();

        let staff = self
            .staff
            .snapshot()
            .iter()
            .filter(|member| {
                matches(&member.full_name(), &needle)
                    || matches(&member.employee_id, &needle)
                    || matches(&member.position, &needle)
            })
            .cloned()
            .collect();

        let visitors = self
            .visitors
            .snapshot()
            .iter()
            .filter(|visitor| {
                matches(&visitor.full_name(), &needle) || matches(&visitor.relationship, &needle)
            })
            .cloned()
            .collect();

        SearchResults {
            inmates,
            staff,
            visitors,
        }
    }
}
