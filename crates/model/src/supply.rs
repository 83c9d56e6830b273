//! Supply item records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::record::{Record, RecordKind};

/// Category of a tracked supply item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyCategory {
    /// Durable equipment.
    Equipment,
    /// Consumable supplies.
    Supplies,
    /// Food stock.
    Food,
    /// Medical stock.
    Medical,
    /// Security hardware.
    Security,
}

impl fmt::Display for SupplyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplyCategory::Equipment => write!(f, "equipment"),
            SupplyCategory::Supplies => write!(f, "supplies"),
            SupplyCategory::Food => write!(f, "food"),
            SupplyCategory::Medical => write!(f, "medical"),
            SupplyCategory::Security => write!(f, "security"),
        }
    }
}

impl FromStr for SupplyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equipment" => Ok(SupplyCategory::Equipment),
            "supplies" => Ok(SupplyCategory::Supplies),
            "food" => Ok(SupplyCategory::Food),
            "medical" => Ok(SupplyCategory::Medical),
            "security" => Ok(SupplyCategory::Security),
            _ => Err(format!("unknown supply category: {}", s)),
        }
    }
}

/// Availability status of a supply item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyStatus {
    /// In stock and usable.
    Available,
    /// Currently checked out or deployed.
    InUse,
    /// Under maintenance.
    Maintenance,
    /// Stock exhausted.
    Depleted,
}

impl fmt::Display for SupplyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplyStatus::Available => write!(f, "available"),
            SupplyStatus::InUse => write!(f, "in_use"),
            SupplyStatus::Maintenance => write!(f, "maintenance"),
            SupplyStatus::Depleted => write!(f, "depleted"),
        }
    }
}

impl FromStr for SupplyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(SupplyStatus::Available),
            "in_use" => Ok(SupplyStatus::InUse),
            "maintenance" => Ok(SupplyStatus::Maintenance),
            "depleted" => Ok(SupplyStatus::Depleted),
            _ => Err(format!("unknown supply status: {}", s)),
        }
    }
}

/// A tracked facility supply item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyItem {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Item name.
    pub name: String,
    /// Item category.
    pub category: SupplyCategory,
    /// Quantity on hand.
    pub quantity: u32,
    /// Unit of measure (e.g., "units", "boxes").
    pub unit: String,
    /// Storage or deployment location.
    pub location: String,
    /// Availability status.
    pub status: SupplyStatus,
    /// Date the quantity or status was last updated.
    pub last_updated: NaiveDate,
}

/// Partial update for a [`SupplyItem`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplyItemPatch {
    /// New item name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<SupplyCategory>,
    /// New quantity.
    pub quantity: Option<u32>,
    /// New unit of measure.
    pub unit: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New availability status.
    pub status: Option<SupplyStatus>,
    /// New last-updated date.
    pub last_updated: Option<NaiveDate>,
}

impl Record for SupplyItem {
    type Patch = SupplyItemPatch;

    const KIND: RecordKind = RecordKind::SupplyItem;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn apply(&mut self, patch: SupplyItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(last_updated) = patch.last_updated {
            self.last_updated = last_updated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("food".parse::<SupplyCategory>(), Ok(SupplyCategory::Food));
        assert!("office".parse::<SupplyCategory>().is_err());
    }

    #[test]
    fn test_status_serde_rename() {
        let json = serde_json::to_string(&SupplyStatus::InUse).unwrap();
        assert_eq!(json, "\"in_use\"");
    }

    #[test]
    fn test_patch_quantity() {
        let mut item = SupplyItem {
            id: RecordId::new("sup-1"),
            name: "Security Cameras".to_string(),
            category: SupplyCategory::Security,
            quantity: 45,
            unit: "units".to_string(),
            location: "Various".to_string(),
            status: SupplyStatus::Available,
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };

        item.apply(SupplyItemPatch {
            quantity: Some(40),
            status: Some(SupplyStatus::Maintenance),
            ..SupplyItemPatch::default()
        });

        assert_eq!(item.quantity, 40);
        assert_eq!(item.status, SupplyStatus::Maintenance);
        assert_eq!(item.name, "Security Cameras");
    }
}
