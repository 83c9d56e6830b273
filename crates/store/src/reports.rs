//! Report generation.
//!
//! On-demand structured summaries composed from the same aggregation
//! primitives the dashboard uses, with an optional date-range filter
//! applied first. Output is a plain nested mapping of counters and named
//! sub-histograms, suitable for serialization; rendering belongs to the
//! consumer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use warden_model::{
    IncidentStatus, InmateStatus, SecurityIncident, Severity, Visitor, VisitorStatus,
};

use crate::analytics::{Histogram, UNASSIGNED};
use crate::store::FacilityStore;

/// Total bed capacity of the facility, used for the occupancy rate.
pub const FACILITY_CAPACITY: usize = 500;

/// The report variants the store can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Current population statistics and demographics.
    InmatePopulation,
    /// Security incidents within a date range.
    SecurityIncidents,
    /// Visitor registrations and visitation within a date range.
    VisitorStatistics,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::InmatePopulation => write!(f, "inmate_population"),
            ReportKind::SecurityIncidents => write!(f, "security_incidents"),
            ReportKind::VisitorStatistics => write!(f, "visitor_statistics"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inmate_population" => Ok(ReportKind::InmatePopulation),
            "security_incidents" => Ok(ReportKind::SecurityIncidents),
            "visitor_statistics" => Ok(ReportKind::VisitorStatistics),
            _ => Err(format!("unknown report kind: {}", s)),
        }
    }
}

/// An inclusive date range.
///
/// A record is inside the range when its date is `>= start` and
/// `<= end`. Records with no relevant date are excluded rather than
/// failing the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `start..=end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the date falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Summary counters of the population report.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationSummary {
    /// All inmates on record.
    pub total_inmates: usize,
    /// Inmates with status `active`.
    pub active_inmates: usize,
    /// Inmates with status `released`.
    pub released_inmates: usize,
    /// Inmates with status `transferred`.
    pub transferred_inmates: usize,
    /// Active inmates as a percentage of [`FACILITY_CAPACITY`], rounded
    /// to one decimal place.
    pub occupancy_rate: f64,
}

/// Current population statistics and demographics.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationReport {
    /// Summary counters.
    pub summary: PopulationSummary,
    /// Inmates per cell block.
    pub cell_blocks: Histogram,
    /// Inmates per crime type.
    pub crime_types: Histogram,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

/// Summary counters of the security-incident report.
#[derive(Debug, Clone, Serialize)]
pub struct SecuritySummary {
    /// Incidents inside the date range.
    pub total_incidents: usize,
    /// Of those, incidents still `open`.
    pub open_incidents: usize,
    /// Of those, incidents `resolved`.
    pub resolved_incidents: usize,
    /// Of those, incidents with `critical` severity (any status).
    pub critical_incidents: usize,
}

/// Security incidents within a date range.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityReport {
    /// Summary counters.
    pub summary: SecuritySummary,
    /// Incidents per kind.
    pub incident_kinds: Histogram,
    /// Incidents per severity.
    pub severity_levels: Histogram,
    /// The range the report covers, if one was applied.
    pub date_range: Option<DateRange>,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

/// Summary counters of the visitor report.
#[derive(Debug, Clone, Serialize)]
pub struct VisitorSummary {
    /// Visitors whose last visit falls inside the date range.
    pub total_visitors: usize,
    /// Of those, approved visitors.
    pub approved_visitors: usize,
    /// Of those, pending visitors.
    pub pending_visitors: usize,
    /// Of those, denied visitors.
    pub denied_visitors: usize,
}

/// Visitor registrations and visitation within a date range.
#[derive(Debug, Clone, Serialize)]
pub struct VisitorReport {
    /// Summary counters.
    pub summary: VisitorSummary,
    /// Visitors per relationship.
    pub relationships: Histogram,
    /// The range the report covers, if one was applied.
    pub date_range: Option<DateRange>,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

/// A generated report.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    /// Population report.
    InmatePopulation(PopulationReport),
    /// Security-incident report.
    SecurityIncidents(SecurityReport),
    /// Visitor report.
    VisitorStatistics(VisitorReport),
}

impl Report {
    /// Returns the kind of this report.
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::InmatePopulation(_) => ReportKind::InmatePopulation,
            Report::SecurityIncidents(_) => ReportKind::SecurityIncidents,
            Report::VisitorStatistics(_) => ReportKind::VisitorStatistics,
        }
    }
}

/// Rounds to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn tally_by<T, F>(items: &[T], mut key: F) -> Histogram
where
    F: FnMut(&T) -> String,
{
    let mut histogram = Histogram::new();
    for item in items {
        *histogram.entry(key(item)).or_insert(0) += 1;
    }
    histogram
}

impl FacilityStore {
    /// Generates the report selected by `kind`.
    ///
    /// The date range restricts the security and visitor reports to
    /// records whose relevant date falls inside it (inclusive both ends);
    /// the population report is a point-in-time snapshot and ignores it.
    /// With no range, all records are included. Empty collections produce
    /// well-formed zero-valued reports.
    pub fn generate_report(&self, kind: ReportKind, range: Option<DateRange>) -> Report {
        match kind {
            ReportKind::InmatePopulation => Report::InmatePopulation(self.population_report()),
            ReportKind::SecurityIncidents => Report::SecurityIncidents(self.security_report(range)),
            ReportKind::VisitorStatistics => Report::VisitorStatistics(self.visitor_report(range)),
        }
    }

    fn population_report(&self) -> PopulationReport {
        let inmates = self.inmates.snapshot();

        let active_inmates = inmates
            .iter()
            .filter(|i| i.status == InmateStatus::Active)
            .count();
        let released_inmates = inmates
            .iter()
            .filter(|i| i.status == InmateStatus::Released)
            .count();
        let transferred_inmates = inmates
            .iter()
            .filter(|i| i.status == InmateStatus::Transferred)
            .count();

        let cell_blocks = tally_by(&inmates, |inmate| {
            if inmate.block.trim().is_empty() {
                UNASSIGNED.to_string()
            } else {
                inmate.block.clone()
            }
        });
        let crime_types = tally_by(&inmates, |inmate| {
            if inmate.crime_type.trim().is_empty() {
                UNASSIGNED.to_string()
            } else {
                inmate.crime_type.clone()
            }
        });

        PopulationReport {
            summary: PopulationSummary {
                total_inmates: inmates.len(),
                active_inmates,
                released_inmates,
                transferred_inmates,
                occupancy_rate: round1(active_inmates as f64 / FACILITY_CAPACITY as f64 * 100.0),
            },
            cell_blocks,
            crime_types,
            generated_at: Utc::now(),
        }
    }

    fn security_report(&self, range: Option<DateRange>) -> SecurityReport {
        let incidents = self.security_incidents.snapshot();
        let in_range: Vec<SecurityIncident> = incidents
            .iter()
            .filter(|incident| range.is_none_or(|range| range.contains(incident.date)))
            .cloned()
            .collect();

        let open_incidents = in_range
            .iter()
            .filter(|i| i.status == IncidentStatus::Open)
            .count();
        let resolved_incidents = in_range
            .iter()
            .filter(|i| i.status == IncidentStatus::Resolved)
            .count();
        let critical_incidents = in_range
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .count();

        SecurityReport {
            summary: SecuritySummary {
                total_incidents: in_range.len(),
                open_incidents,
                resolved_incidents,
                critical_incidents,
            },
            incident_kinds: tally_by(&in_range, |incident| incident.kind.to_string()),
            severity_levels: tally_by(&in_range, |incident| incident.severity.to_string()),
            date_range: range,
            generated_at: Utc::now(),
        }
    }

    fn visitor_report(&self, range: Option<DateRange>) -> VisitorReport {
        let visitors = self.visitors.snapshot();
        // A visitor with no recorded visit is excluded from any range.
        let in_range: Vec<Visitor> = visitors
            .iter()
            .filter(|visitor| match range {
                None => true,
                Some(range) => visitor.last_visit.is_some_and(|date| range.contains(date)),
            })
            .cloned()
            .collect();

        let approved_visitors = in_range
            .iter()
            .filter(|v| v.status == VisitorStatus::Approved)
            .count();
        let pending_visitors = in_range
            .iter()
            .filter(|v| v.status == VisitorStatus::Pending)
            .count();
        let denied_visitors = in_range
            .iter()
            .filter(|v| v.status == VisitorStatus::Denied)
            .count();

        VisitorReport {
            summary: VisitorSummary {
                total_visitors: in_range.len(),
                approved_visitors,
                pending_visitors,
                denied_visitors,
            },
            relationships: tally_by(&in_range, |visitor| {
                if visitor.relationship.trim().is_empty() {
                    UNASSIGNED.to_string()
                } else {
                    visitor.relationship.clone()
                }
            }),
            date_range: range,
            generated_at: Utc::now(),
        }
    }
}
