use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A single inventory record.
///
/// The persisted JSON keeps the on-device field casing (`createdAt`,
/// `updatedAt`), and `updatedAt` is absent until the first update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Item {
    pub fn new(draft: ItemDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name.trim().to_string(),
            quantity: draft.quantity,
            category: draft.category.trim().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overlay the present patch fields and refresh `updated_at`.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(category) = &patch.category {
            self.category = category.trim().to_string();
        }
        self.updated_at = Some(Utc::now());
    }
}

/// Input for creating an item. Validated before any store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: u32,
    pub category: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, quantity: u32, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            category: category.into(),
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Item name is required"));
        }
        if self.quantity == 0 {
            errors.push(FieldError::new(
                "quantity",
                "Quantity must be a positive number",
            ));
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "Category is required"));
        }
        errors
    }
}

/// A partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.category.is_none()
    }

    /// Same field rules as [`ItemDraft::validate`], applied only to the
    /// fields the patch actually carries.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                errors.push(FieldError::new("name", "Item name is required"));
            }
        }
        if self.quantity == Some(0) {
            errors.push(FieldError::new(
                "quantity",
                "Quantity must be a positive number",
            ));
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                errors.push(FieldError::new("category", "Category is required"));
            }
        }
        errors
    }
}

/// A per-field validation failure, surfaced before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The fixed category set offered by the UI.
///
/// Only the CLI argument parser enforces this set; the store itself accepts
/// any non-empty category string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Furniture,
    Electronics,
    Stationary,
    Grocery,
    Pharmacy,
    Toys,
    Others,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Furniture,
        Category::Electronics,
        Category::Stationary,
        Category::Grocery,
        Category::Pharmacy,
        Category::Toys,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Furniture => "Furniture",
            Category::Electronics => "Electronics",
            Category::Stationary => "Stationary",
            Category::Grocery => "Grocery",
            Category::Pharmacy => "Pharmacy",
            Category::Toys => "Toys",
            Category::Others => "Others",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}
