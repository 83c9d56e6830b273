//! Dashboard statistics.
//!
//! A fixed snapshot of operational counters computed from current store
//! state. The computation is one pass per collection and retains no state
//! between calls: every call reflects exactly the collections at that
//! moment.

use chrono::{Days, NaiveDate, Utc};
use serde::Serialize;

use warden_model::{
    IncidentStatus, InmateStatus, SecurityIncident, Severity, StaffStatus, VisitorStatus,
};

use crate::analytics::{Histogram, UNASSIGNED};
use crate::store::FacilityStore;

/// Days ahead considered "upcoming" for expected releases.
pub const RELEASE_WINDOW_DAYS: u64 = 30;

/// Number of incidents reported in [`DashboardStats::recent_incidents`].
pub const RECENT_INCIDENT_COUNT: usize = 5;

/// Operational counters for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Inmates with status `active`.
    pub total_inmates: usize,
    /// Staff with status `active`.
    pub total_staff: usize,
    /// Visitors awaiting approval.
    pub pending_visitors: usize,
    /// Incidents that are both `critical` severity and still `open`.
    pub critical_incidents: usize,
    /// Active inmates with an expected release date within the inclusive
    /// window `[today, today + 30 days]`. Past release dates do not count.
    pub upcoming_releases: usize,
    /// The five most recent incidents, newest first. Ties in date keep
    /// their original collection order.
    pub recent_incidents: Vec<SecurityIncident>,
    /// Active inmates per cell block; empty blocks count under
    /// "Unassigned".
    pub capacity_by_block: Histogram,
}

impl FacilityStore {
    /// Computes dashboard statistics as of today (UTC).
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.dashboard_stats_at(Utc::now().date_naive())
    }

    /// Computes dashboard statistics as of the given date.
    ///
    /// The date only affects the upcoming-release window; everything else
    /// is a pure function of collection contents.
    pub fn dashboard_stats_at(&self, today: NaiveDate) -> DashboardStats {
        let inmates = self.inmates.snapshot();
        let staff = self.staff.snapshot();
        let visitors = self.visitors.snapshot();
        let incidents = self.security_incidents.snapshot();

        let total_inmates = inmates
            .iter()
            .filter(|inmate| inmate.status == InmateStatus::Active)
            .count();

        let total_staff = staff
            .iter()
            .filter(|member| member.status == StaffStatus::Active)
            .count();

        let pending_visitors = visitors
            .iter()
            .filter(|visitor| visitor.status == VisitorStatus::Pending)
            .count();

        let critical_incidents = incidents
            .iter()
            .filter(|incident| {
                incident.severity == Severity::Critical && incident.status == IncidentStatus::Open
            })
            .count();

        let window_end = today
            .checked_add_days(Days::new(RELEASE_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);
        let upcoming_releases = inmates
            .iter()
            .filter(|inmate| {
                inmate.status == InmateStatus::Active
                    && inmate.expected_release_date >= today
                    && inmate.expected_release_date <= window_end
            })
            .count();

        let mut recent_incidents: Vec<SecurityIncident> = incidents.to_vec();
        // Stable sort: equal dates keep collection order.
        recent_incidents.sort_by(|a, b| b.date.cmp(&a.date));
        recent_incidents.truncate(RECENT_INCIDENT_COUNT);

        let mut capacity_by_block = Histogram::new();
        for inmate in inmates
            .iter()
            .filter(|inmate| inmate.status == InmateStatus::Active)
        {
            let block = if inmate.block.is_empty() {
                UNASSIGNED.to_string()
            } else {
                inmate.block.clone()
            };
            *capacity_by_block.entry(block).or_insert(0) += 1;
        }

        DashboardStats {
            total_inmates,
            total_staff,
            pending_visitors,
            critical_incidents,
            upcoming_releases,
            recent_incidents,
            capacity_by_block,
        }
    }
}
