//! Generic in-memory record collection.
//!
//! [`Collection`] is the single mutation path for one record kind. All
//! writes go through one `RwLock` writer, so no two mutations interleave,
//! and every mutation swaps in a freshly built `Arc<[T]>` snapshot:
//! readers holding the previous snapshot keep a consistent view, and
//! observers comparing snapshot pointers see every update.

use std::sync::Arc;

use parking_lot::RwLock;

use warden_model::{Record, RecordId};

use crate::error::{StoreError, StoreResult};

/// An in-memory collection of records of one kind.
///
/// Records are held in insertion order. Reads return either cloned records
/// or a shared snapshot; neither blocks concurrent readers.
#[derive(Debug)]
pub struct Collection<T> {
    records: RwLock<Arc<[T]>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Arc::from(Vec::new())),
        }
    }
}

impl<T: Record + Clone> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from existing records (seed data).
    ///
    /// Records without an id are given a freshly generated one.
    pub fn from_records(records: Vec<T>) -> Self {
        let records: Vec<T> = records
            .into_iter()
            .map(|mut record| {
                if record.id().is_unassigned() {
                    record.set_id(RecordId::generate());
                }
                record
            })
            .collect();
        Self {
            records: RwLock::new(Arc::from(records)),
        }
    }

    /// Adds a record, assigning it a fresh id.
    ///
    /// Any caller-supplied id is discarded. Returns the stored value.
    /// This operation is total: no validation is applied beyond what the
    /// typed record already guarantees.
    pub fn add(&self, mut record: T) -> T {
        let id = RecordId::generate();
        record.set_id(id.clone());

        let mut guard = self.records.write();
        let mut next: Vec<T> = guard.to_vec();
        next.push(record.clone());
        *guard = Arc::from(next);

        tracing::debug!(kind = %T::KIND, id = %id, "record added");
        record
    }

    /// Merges the patch into the record with the given id.
    ///
    /// Returns the updated record, or [`StoreError::NotFound`] if no
    /// record matches. An empty patch leaves the record unchanged.
    pub fn update(&self, id: &RecordId, patch: T::Patch) -> StoreResult<T> {
        let mut guard = self.records.write();

        let Some(index) = guard.iter().position(|record| record.id() == id) else {
            return Err(StoreError::NotFound {
                kind: T::KIND,
                id: id.clone(),
            });
        };

        let mut next: Vec<T> = guard.to_vec();
        next[index].apply(patch);
        let updated = next[index].clone();
        *guard = Arc::from(next);

        tracing::debug!(kind = %T::KIND, id = %id, "record updated");
        Ok(updated)
    }

    /// Removes the record with the given id.
    ///
    /// Returns [`StoreError::NotFound`] if no record matches; the
    /// collection is left untouched in that case, so a repeated delete is
    /// safe.
    pub fn remove(&self, id: &RecordId) -> StoreResult<()> {
        let mut guard = self.records.write();

        if !guard.iter().any(|record| record.id() == id) {
            return Err(StoreError::NotFound {
                kind: T::KIND,
                id: id.clone(),
            });
        }

        let next: Vec<T> = guard
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        *guard = Arc::from(next);

        tracing::debug!(kind = %T::KIND, id = %id, "record removed");
        Ok(())
    }

    /// Returns a clone of the record with the given id, if present.
    pub fn get(&self, id: &RecordId) -> Option<T> {
        self.records
            .read()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Returns a shared snapshot of the collection.
    ///
    /// The snapshot is immutable; a new one (with a new pointer identity)
    /// is produced by every mutation.
    pub fn snapshot(&self) -> Arc<[T]> {
        Arc::clone(&self.records.read())
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
