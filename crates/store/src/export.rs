//! Export serialization.
//!
//! Turns store contents and generated reports into downloadable shapes:
//! a fully-enumerable JSON value for data exports, and delimited text for
//! report downloads. No file or network I/O happens here; the consumer
//! decides where the bytes go.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use warden_model::{InmateStatus, StaffStatus};

use crate::analytics::Histogram;
use crate::reports::Report;
use crate::store::FacilityStore;

/// Format version stamped into export metadata.
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// Selects which collections a data export includes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Include the inmate collection.
    pub inmates: bool,
    /// Include the staff collection.
    pub staff: bool,
    /// Include the visitor collection.
    pub visitors: bool,
    /// Include the medical-record collection.
    pub medical_records: bool,
    /// Include the security-incident collection.
    pub security_incidents: bool,
    /// Include the supply-item collection.
    pub supply_items: bool,
    /// When `false`, inmates and staff are restricted to `active` status.
    pub include_inactive: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            inmates: true,
            staff: true,
            visitors: true,
            medical_records: true,
            security_incidents: true,
            supply_items: true,
            include_inactive: false,
        }
    }
}

/// Serializes the selected collections into one JSON value.
///
/// The result carries a `metadata` object with the export timestamp, the
/// total number of exported records, and the format version. Every value
/// in the result is a plain enumerable mapping, array, string, or number.
pub fn export_json(store: &FacilityStore, options: &ExportOptions) -> Value {
    let mut data = serde_json::Map::new();
    let mut total_records = 0usize;

    if options.inmates {
        let inmates: Vec<_> = store
            .inmates()
            .iter()
            .filter(|inmate| options.include_inactive || inmate.status == InmateStatus::Active)
            .cloned()
            .collect();
        total_records += inmates.len();
        data.insert("inmates".to_string(), json!(inmates));
    }

    if options.staff {
        let staff: Vec<_> = store
            .staff()
            .iter()
            .filter(|member| options.include_inactive || member.status == StaffStatus::Active)
            .cloned()
            .collect();
        total_records += staff.len();
        data.insert("staff".to_string(), json!(staff));
    }

    if options.visitors {
        let visitors = store.visitors();
        total_records += visitors.len();
        data.insert("visitors".to_string(), json!(visitors.to_vec()));
    }

    if options.medical_records {
        let records = store.medical_records();
        total_records += records.len();
        data.insert("medical_records".to_string(), json!(records.to_vec()));
    }

    if options.security_incidents {
        let incidents = store.security_incidents();
        total_records += incidents.len();
        data.insert("security_incidents".to_string(), json!(incidents.to_vec()));
    }

    if options.supply_items {
        let items = store.supply_items();
        total_records += items.len();
        data.insert("supply_items".to_string(), json!(items.to_vec()));
    }

    data.insert(
        "metadata".to_string(),
        json!({
            "export_date": Utc::now().to_rfc3339(),
            "total_records": total_records,
            "version": EXPORT_FORMAT_VERSION,
        }),
    );

    tracing::debug!(total_records, "data export serialized");
    Value::Object(data)
}

/// Report section titles and rows for delimited-text rendering.
fn report_sections(report: &Report) -> (String, Vec<(String, String)>, Vec<(String, &Histogram)>) {
    match report {
        Report::InmatePopulation(report) => (
            "Inmate Population Report".to_string(),
            vec![
                ("total_inmates".into(), report.summary.total_inmates.to_string()),
                ("active_inmates".into(), report.summary.active_inmates.to_string()),
                ("released_inmates".into(), report.summary.released_inmates.to_string()),
                (
                    "transferred_inmates".into(),
                    report.summary.transferred_inmates.to_string(),
                ),
                ("occupancy_rate".into(), format!("{:.1}", report.summary.occupancy_rate)),
            ],
            vec![
                ("Cell Blocks".to_string(), &report.cell_blocks),
                ("Crime Types".to_string(), &report.crime_types),
            ],
        ),
        Report::SecurityIncidents(report) => (
            "Security Incidents Report".to_string(),
            vec![
                ("total_incidents".into(), report.summary.total_incidents.to_string()),
                ("open_incidents".into(), report.summary.open_incidents.to_string()),
                (
                    "resolved_incidents".into(),
                    report.summary.resolved_incidents.to_string(),
                ),
                (
                    "critical_incidents".into(),
                    report.summary.critical_incidents.to_string(),
                ),
            ],
            vec![
                ("Incident Kinds".to_string(), &report.incident_kinds),
                ("Severity Levels".to_string(), &report.severity_levels),
            ],
        ),
        Report::VisitorStatistics(report) => (
            "Visitor Statistics Report".to_string(),
            vec![
                ("total_visitors".into(), report.summary.total_visitors.to_string()),
                ("approved_visitors".into(), report.summary.approved_visitors.to_string()),
                ("pending_visitors".into(), report.summary.pending_visitors.to_string()),
                ("denied_visitors".into(), report.summary.denied_visitors.to_string()),
            ],
            vec![("Relationships".to_string(), &report.relationships)],
        ),
    }
}

/// Renders a report as delimited text.
///
/// Layout: a title line, a `Summary` section of `key,value` rows, then one
/// section per sub-histogram with its rows sorted by key for a stable
/// output.
pub fn report_csv(report: &Report) -> String {
    let (title, summary, sections) = report_sections(report);

    let mut out = String::new();
    out.push_str(&title);
    out.push('\n');
    out.push('\n');

    out.push_str("Summary\n");
    for (key, value) in summary {
        out.push_str(&key);
        out.push(',');
        out.push_str(&value);
        out.push('\n');
    }

    for (name, histogram) in sections {
        out.push('\n');
        out.push_str(&name);
        out.push('\n');

        let mut rows: Vec<(&String, &usize)> = histogram.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        for (key, count) in rows {
            out.push_str(key);
            out.push(',');
            out.push_str(&count.to_string());
            out.push('\n');
        }
    }

    out
}
