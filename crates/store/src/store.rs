//! The facility store.
//!
//! [`FacilityStore`] owns the six record collections and is the only
//! sanctioned mutation path. All operations are synchronous: callers get
//! plain return values, never futures. Derived reads (search, statistics,
//! analytics, reports) live in their own modules and are implemented as
//! methods on the store.

use std::sync::Arc;

use warden_model::{
    Inmate, InmatePatch, MedicalRecord, MedicalRecordPatch, RecordId, SecurityIncident,
    SecurityIncidentPatch, Staff, StaffPatch, SupplyItem, SupplyItemPatch, Visitor, VisitorPatch,
};

use crate::collection::Collection;
use crate::error::StoreResult;

/// Display name used when an involved-inmate reference no longer resolves.
pub const UNKNOWN_INMATE: &str = "unknown";

/// The in-memory owner of all record collections.
///
/// Pass the store (or an `Arc` of it) explicitly to every consumer, so
/// ownership stays visible and tests construct their own instances. Each
/// mutation produces a new immutable snapshot of the affected collection;
/// nothing is mutated in place.
///
/// # Examples
///
/// ```
/// use warden_store::FacilityStore;
///
/// let store = FacilityStore::new();
/// assert!(store.inmates().is_empty());
///
/// let seeded = FacilityStore::with_seed_data();
/// assert!(!seeded.inmates().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct FacilityStore {
    pub(crate) inmates: Collection<Inmate>,
    pub(crate) staff: Collection<Staff>,
    pub(crate) visitors: Collection<Visitor>,
    pub(crate) medical_records: Collection<MedicalRecord>,
    pub(crate) security_incidents: Collection<SecurityIncident>,
    pub(crate) supply_items: Collection<SupplyItem>,
}

impl FacilityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Inmates ----

    /// Adds an inmate, assigning a fresh id, and returns the stored value.
    pub fn add_inmate(&self, inmate: Inmate) -> Inmate {
        self.inmates.add(inmate)
    }

    /// Merges the patch into the inmate with the given id.
    pub fn update_inmate(&self, id: &RecordId, patch: InmatePatch) -> StoreResult<Inmate> {
        self.inmates.update(id, patch)
    }

    /// Removes the inmate with the given id.
    ///
    /// Records referencing the inmate are not cascaded or invalidated.
    pub fn delete_inmate(&self, id: &RecordId) -> StoreResult<()> {
        self.inmates.remove(id)
    }

    /// Returns the inmate with the given id, if present.
    pub fn inmate(&self, id: &RecordId) -> Option<Inmate> {
        self.inmates.get(id)
    }

    /// Returns a snapshot of all inmates.
    pub fn inmates(&self) -> Arc<[Inmate]> {
        self.inmates.snapshot()
    }

    // ---- Staff ----

    /// Adds a staff member, assigning a fresh id, and returns the stored value.
    pub fn add_staff(&self, staff: Staff) -> Staff {
        self.staff.add(staff)
    }

    /// Merges the patch into the staff member with the given id.
    pub fn update_staff(&self, id: &RecordId, patch: StaffPatch) -> StoreResult<Staff> {
        self.staff.update(id, patch)
    }

    /// Removes the staff member with the given id.
    pub fn delete_staff(&self, id: &RecordId) -> StoreResult<()> {
        self.staff.remove(id)
    }

    /// Returns the staff member with the given id, if present.
    pub fn staff_member(&self, id: &RecordId) -> Option<Staff> {
        self.staff.get(id)
    }

    /// Returns a snapshot of all staff.
    pub fn staff(&self) -> Arc<[Staff]> {
        self.staff.snapshot()
    }

    // ---- Visitors ----

    /// Adds a visitor, assigning a fresh id, and returns the stored value.
    pub fn add_visitor(&self, visitor: Visitor) -> Visitor {
        self.visitors.add(visitor)
    }

    /// Merges the patch into the visitor with the given id.
    pub fn update_visitor(&self, id: &RecordId, patch: VisitorPatch) -> StoreResult<Visitor> {
        self.visitors.update(id, patch)
    }

    /// Removes the visitor with the given id.
    pub fn delete_visitor(&self, id: &RecordId) -> StoreResult<()> {
        self.visitors.remove(id)
    }

    /// Returns the visitor with the given id, if present.
    pub fn visitor(&self, id: &RecordId) -> Option<Visitor> {
        self.visitors.get(id)
    }

    /// Returns a snapshot of all visitors.
    pub fn visitors(&self) -> Arc<[Visitor]> {
        self.visitors.snapshot()
    }

    // ---- Medical records ----

    /// Adds a medical record, assigning a fresh id, and returns the stored value.
    pub fn add_medical_record(&self, record: MedicalRecord) -> MedicalRecord {
        self.medical_records.add(record)
    }

    /// Merges the patch into the medical record with the given id.
    pub fn update_medical_record(
        &self,
        id: &RecordId,
        patch: MedicalRecordPatch,
    ) -> StoreResult<MedicalRecord> {
        self.medical_records.update(id, patch)
    }

    /// Removes the medical record with the given id.
    pub fn delete_medical_record(&self, id: &RecordId) -> StoreResult<()> {
        self.medical_records.remove(id)
    }

    /// Returns the medical record with the given id, if present.
    pub fn medical_record(&self, id: &RecordId) -> Option<MedicalRecord> {
        self.medical_records.get(id)
    }

    /// Returns a snapshot of all medical records.
    pub fn medical_records(&self) -> Arc<[MedicalRecord]> {
        self.medical_records.snapshot()
    }

    // ---- Security incidents ----

    /// Adds a security incident, assigning a fresh id, and returns the stored value.
    pub fn add_security_incident(&self, incident: SecurityIncident) -> SecurityIncident {
        self.security_incidents.add(incident)
    }

    /// Merges the patch into the security incident with the given id.
    pub fn update_security_incident(
        &self,
        id: &RecordId,
        patch: SecurityIncidentPatch,
    ) -> StoreResult<SecurityIncident> {
        self.security_incidents.update(id, patch)
    }

    /// Removes the security incident with the given id.
    pub fn delete_security_incident(&self, id: &RecordId) -> StoreResult<()> {
        self.security_incidents.remove(id)
    }

    /// Returns the security incident with the given id, if present.
    pub fn security_incident(&self, id: &RecordId) -> Option<SecurityIncident> {
        self.security_incidents.get(id)
    }

    /// Returns a snapshot of all security incidents.
    pub fn security_incidents(&self) -> Arc<[SecurityIncident]> {
        self.security_incidents.snapshot()
    }

    // ---- Supply items ----

    /// Adds a supply item, assigning a fresh id, and returns the stored value.
    pub fn add_supply_item(&self, item: SupplyItem) -> SupplyItem {
        self.supply_items.add(item)
    }

    /// Merges the patch into the supply item with the given id.
    pub fn update_supply_item(
        &self,
        id: &RecordId,
        patch: SupplyItemPatch,
    ) -> StoreResult<SupplyItem> {
        self.supply_items.update(id, patch)
    }

    /// Removes the supply item with the given id.
    pub fn delete_supply_item(&self, id: &RecordId) -> StoreResult<()> {
        self.supply_items.remove(id)
    }

    /// Returns the supply item with the given id, if present.
    pub fn supply_item(&self, id: &RecordId) -> Option<SupplyItem> {
        self.supply_items.get(id)
    }

    /// Returns a snapshot of all supply items.
    pub fn supply_items(&self) -> Arc<[SupplyItem]> {
        self.supply_items.snapshot()
    }

    // ---- Cross-collection lookups ----

    /// Resolves the display names of the inmates involved in an incident.
    ///
    /// Names are looked up live against the current inmate collection, so
    /// renames are always reflected. References that no longer resolve
    /// (the inmate was deleted) render as [`UNKNOWN_INMATE`].
    pub fn involved_inmate_names(&self, incident: &SecurityIncident) -> Vec<String> {
        let inmates = self.inmates.snapshot();
        incident
            .involved_inmates
            .iter()
            .map(|id| {
                inmates
                    .iter()
                    .find(|inmate| &inmate.id == id)
                    .map(|inmate| inmate.full_name())
                    .unwrap_or_else(|| UNKNOWN_INMATE.to_string())
            })
            .collect()
    }
}
