//! Warden Record Store
//!
//! In-memory record store and derived reads for the Warden facility back
//! office. The store owns six typed collections (inmates, staff,
//! visitors, medical records, security incidents, and supply items) and
//! provides the only sanctioned mutation path plus every derived read the
//! presentation layer consumes: search and filter predicates, dashboard
//! statistics, analytics histograms, report generation, and export
//! serialization.
//!
//! # Architecture
//!
//! - [`collection`] - The generic copy-on-write collection behind each
//!   record kind
//! - [`store`] - [`FacilityStore`], the single owner of all collections
//! - [`search`] - Pure search and filter predicates
//! - [`stats`] - Dashboard statistics, recomputed on every read
//! - [`analytics`] - Histogram aggregation for chart views
//! - [`reports`] - On-demand structured reports with date-range filtering
//! - [`export`] - JSON and delimited-text serialization of store contents
//!   and reports
//! - [`access`] - The permission gate consumers sit behind
//! - [`error`] - Error types
//!
//! Control flow is unidirectional and synchronous: a consumer reads a
//! snapshot, renders it, and writes back through a mutation, which swaps
//! in a new immutable snapshot. There is no async I/O anywhere in this
//! crate. Mutations are serialized through one writer lock per
//! collection, so the single-writer invariant holds on multi-threaded
//! consumers too.
//!
//! # Quick Start
//!
//! ```
//! use warden_model::{InmatePatch, InmateStatus};
//! use warden_store::FacilityStore;
//!
//! let store = FacilityStore::with_seed_data();
//!
//! // Search and filter.
//! let hits = store.search_inmates("john");
//! assert_eq!(hits.len(), 2);
//! let block_a = store.filter_inmates(None, Some("A"));
//! assert_eq!(block_a.len(), 1);
//!
//! // Mutate through the store.
//! let inmate = &hits[0];
//! store
//!     .update_inmate(
//!         &inmate.id,
//!         InmatePatch {
//!             status: Some(InmateStatus::Released),
//!             ..InmatePatch::default()
//!         },
//!     )
//!     .unwrap();
//!
//! // Derived reads always reflect current state.
//! let stats = store.dashboard_stats();
//! assert_eq!(stats.total_inmates, 2);
//!
//! let analytics = store.analytics();
//! let total: usize = analytics.crime_types.values().sum();
//! assert_eq!(total, store.inmates().len());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod access;
pub mod analytics;
pub mod collection;
pub mod error;
pub mod export;
pub mod reports;
pub mod search;
mod seed;
pub mod stats;
pub mod store;

// Re-export commonly used types at crate root
pub use access::{AccessGate, Permissions, Role, Section};
pub use analytics::{Analytics, Histogram};
pub use collection::Collection;
pub use error::{AccessError, StoreError, StoreResult};
pub use export::{ExportOptions, export_json, report_csv};
pub use reports::{DateRange, Report, ReportKind};
pub use search::SearchResults;
pub use stats::DashboardStats;
pub use store::FacilityStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
