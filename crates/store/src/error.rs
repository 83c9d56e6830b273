//! Error types for the record store.
//!
//! The store performs no I/O, so the taxonomy is small: lookups that miss
//! are surfaced as [`StoreError::NotFound`] rather than silently ignored,
//! and permission checks fail with [`AccessError`]. Every derived read
//! (statistics, analytics, reports) is total and has no error path.

use thiserror::Error;

use warden_model::{RecordId, RecordKind};

use crate::access::Section;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The primary error type for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record of the given kind has the given id.
    #[error("record not found: {kind}/{id}")]
    NotFound {
        /// The record kind that was addressed.
        kind: RecordKind,
        /// The id that did not match any record.
        id: RecordId,
    },

    /// A permission check failed.
    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Errors raised by the permission gate.
#[derive(Error, Debug)]
pub enum AccessError {
    /// The current permissions do not grant access to a section.
    #[error("access denied: section {section} is not granted")]
    Denied {
        /// The section that was requested.
        section: Section,
    },

    /// No user is signed in.
    #[error("not authenticated")]
    NotAuthenticated,
}
