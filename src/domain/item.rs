//! Catalog item entity and its request payloads.
//!
//! [`ItemDraft`] carries the create payload and owns the required-field
//! check; [`ItemPatch`] is the explicit allow-list of updatable fields, so
//! arbitrary keys in an update payload are dropped during deserialisation
//! rather than assigned dynamically.

use serde::Deserialize;
use thiserror::Error;

/// Store-assigned item identifier.
pub type ItemId = i32;

/// Required attribute names, in the order they are reported when missing.
pub const REQUIRED_FIELDS: [&str; 5] = ["name", "price", "size", "weight", "color"];

/// A persisted catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Store-assigned unique identifier.
    pub id: ItemId,
    /// Item name.
    pub name: String,
    /// Price; expected non-negative but not enforced.
    pub price: f64,
    /// Size label.
    pub size: String,
    /// Weight; expected non-negative but not enforced.
    pub weight: f64,
    /// Colour label.
    pub color: String,
}

/// A fully validated item ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub size: String,
    pub weight: f64,
    pub color: String,
}

/// Incoming create payload; every attribute is optional so the validator
/// can report the complete set of missing names in one response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub size: Option<String>,
    pub weight: Option<f64>,
    pub color: Option<String>,
}

/// Validation failure listing the absent required attribute names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Пропущені поля: {}", .missing.join(", "))]
pub struct MissingFieldsError {
    /// Missing names in [`REQUIRED_FIELDS`] order.
    pub missing: Vec<&'static str>,
}

impl ItemDraft {
    /// Report which required attributes are absent, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(REQUIRED_FIELDS[0]);
        }
        if self.price.is_none() {
            missing.push(REQUIRED_FIELDS[1]);
        }
        if self.size.is_none() {
            missing.push(REQUIRED_FIELDS[2]);
        }
        if self.weight.is_none() {
            missing.push(REQUIRED_FIELDS[3]);
        }
        if self.color.is_none() {
            missing.push(REQUIRED_FIELDS[4]);
        }
        missing
    }
}

impl TryFrom<ItemDraft> for NewItem {
    type Error = MissingFieldsError;

    fn try_from(draft: ItemDraft) -> Result<Self, Self::Error> {
        let missing = draft.missing_fields();
        match (draft.name, draft.price, draft.size, draft.weight, draft.color) {
            (Some(name), Some(price), Some(size), Some(weight), Some(color)) => Ok(Self {
                name,
                price,
                size,
                weight,
                color,
            }),
            _ => Err(MissingFieldsError { missing }),
        }
    }
}

/// Partial update payload. Absent fields keep their stored values; unknown
/// JSON keys are silently ignored by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub size: Option<String>,
    pub weight: Option<f64>,
    pub color: Option<String>,
}

impl ItemPatch {
    /// True when no field is set, making the update a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.size.is_none()
            && self.weight.is_none()
            && self.color.is_none()
    }
}
