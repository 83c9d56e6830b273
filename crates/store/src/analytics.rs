//! Analytics histogram aggregation.
//!
//! Grouped counts over several dimensions, consumed by chart views. Each
//! dimension is produced by a single pass over its collection: extract a
//! categorical key, increment a per-key counter. Within one dimension the
//! bucket counts always sum to the size of the input collection; empty
//! or unanswerable values are counted under an explicit bucket, never
//! dropped.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::store::FacilityStore;

/// A mapping from categorical key to record count.
///
/// Keys are unordered; consumers re-sort by count or by a fixed category
/// list before display.
pub type Histogram = HashMap<String, usize>;

/// Bucket label for records with an empty categorical value.
pub const UNASSIGNED: &str = "Unassigned";

/// Bucket label for records whose key cannot be computed (e.g., a date of
/// birth in the future).
pub const UNKNOWN: &str = "Unknown";

/// Age bands used for the inmate age distribution.
///
/// The bands are exhaustive and non-overlapping; every inmate lands in
/// exactly one (or in [`UNKNOWN`] when no age can be derived).
pub const AGE_BANDS: [&str; 6] = ["Under 18", "18-25", "26-35", "36-45", "46-55", "56+"];

/// Incident histograms, keyed two ways.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IncidentAnalytics {
    /// Incidents per severity level.
    pub by_severity: Histogram,
    /// Incidents per incident kind.
    pub by_kind: Histogram,
}

/// Medical-record histograms.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MedicalAnalytics {
    /// Records per visit category.
    pub by_kind: Histogram,
}

/// Staff histograms, keyed two ways.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StaffAnalytics {
    /// Staff per department.
    pub by_department: Histogram,
    /// Staff per shift.
    pub by_shift: Histogram,
}

/// Grouped counts over every analytics dimension.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Analytics {
    /// Inmates per crime type.
    pub crime_types: Histogram,
    /// Inmates per cell block.
    pub cell_blocks: Histogram,
    /// Inmates per age band.
    pub age_groups: Histogram,
    /// Incident distributions.
    pub incidents: IncidentAnalytics,
    /// Medical-record distributions.
    pub medical: MedicalAnalytics,
    /// Staff distributions.
    pub staff: StaffAnalytics,
}

/// Tallies one categorical key per item into a histogram.
fn tally<I, F>(items: I, mut key: F) -> Histogram
where
    I: IntoIterator,
    F: FnMut(I::Item) -> String,
{
    let mut histogram = Histogram::new();
    for item in items {
        *histogram.entry(key(item)).or_insert(0) += 1;
    }
    histogram
}

/// Substitutes [`UNASSIGNED`] for empty categorical values.
fn or_unassigned(value: &str) -> String {
    if value.trim().is_empty() {
        UNASSIGNED.to_string()
    } else {
        value.to_string()
    }
}

/// Returns the age band for a date of birth as of `today`.
///
/// A date of birth later than `today` yields [`UNKNOWN`].
pub fn age_band(date_of_birth: NaiveDate, today: NaiveDate) -> &'static str {
    match today.years_since(date_of_birth) {
        None => UNKNOWN,
        Some(age) if age < 18 => AGE_BANDS[0],
        Some(age) if age <= 25 => AGE_BANDS[1],
        Some(age) if age <= 35 => AGE_BANDS[2],
        Some(age) if age <= 45 => AGE_BANDS[3],
        Some(age) if age <= 55 => AGE_BANDS[4],
        Some(_) => AGE_BANDS[5],
    }
}

impl FacilityStore {
    /// Computes every analytics dimension as of today (UTC).
    pub fn analytics(&self) -> Analytics {
        self.analytics_at(Utc::now().date_naive())
    }

    /// Computes every analytics dimension, bucketing ages as of `today`.
    pub fn analytics_at(&self, today: NaiveDate) -> Analytics {
        let inmates = self.inmates.snapshot();
        let staff = self.staff.snapshot();
        let medical_records = self.medical_records.snapshot();
        let incidents = self.security_incidents.snapshot();

        let crime_types = tally(inmates.iter(), |inmate| or_unassigned(&inmate.crime_type));
        let cell_blocks = tally(inmates.iter(), |inmate| or_unassigned(&inmate.block));
        let age_groups = tally(inmates.iter(), |inmate| {
            age_band(inmate.date_of_birth, today).to_string()
        });

        let incidents = IncidentAnalytics {
            by_severity: tally(incidents.iter(), |incident| incident.severity.to_string()),
            by_kind: tally(incidents.iter(), |incident| incident.kind.to_string()),
        };

        let medical = MedicalAnalytics {
            by_kind: tally(medical_records.iter(), |record| record.kind.to_string()),
        };

        let staff = StaffAnalytics {
            by_department: tally(staff.iter(), |member| or_unassigned(&member.department)),
            by_shift: tally(staff.iter(), |member| member.shift.to_string()),
        };

        Analytics {
            crime_types,
            cell_blocks,
            age_groups,
            incidents,
            medical,
            staff,
        }
    }
}
