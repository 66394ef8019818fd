//! Item domain model.
//!
//! # Responsibility
//! - Define the canonical record for one catalogued ingredient.
//! - Enforce the empty-name rejection rule at construction time.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `(emoji, category)` is a pure function of `name` at creation time;
//!   re-deriving from the same name yields the same pair.
//! - `name` is stored trimmed; blank names never produce an item.

use crate::classify::classify;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every catalogued item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Closed classification set for catalogued ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Dairy,
    Meat,
    Vegetable,
    /// Anything the classifier tables do not cover.
    Other,
}

impl Category {
    /// Stable string id used in events and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Vegetable => "vegetable",
            Self::Other => "other",
        }
    }
}

/// Construction error for item input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Name was empty or whitespace-only after trimming.
    EmptyName,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name cannot be empty"),
        }
    }
}

impl Error for ItemValidationError {}

/// One catalogued ingredient on a shelf.
///
/// The display glyph and category are derived once from `name` and are never
/// user-supplied directly, so `Item` is serialize-only: accepting external
/// item payloads would bypass the classification invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Stable ID used for removal and event payloads.
    pub id: ItemId,
    /// Trimmed free-text label as entered by the user.
    pub name: String,
    /// Display glyph derived from `name` by the classifier.
    pub emoji: &'static str,
    /// Classification derived from `name` by the classifier.
    pub category: Category,
}

impl Item {
    /// Creates an item from raw user input with a generated stable ID.
    ///
    /// # Contract
    /// - Trims surrounding whitespace from `raw_name`.
    /// - Derives `emoji` and `category` through [`classify`].
    ///
    /// # Errors
    /// - `ItemValidationError::EmptyName` when the trimmed name is empty.
    pub fn new(raw_name: &str) -> Result<Self, ItemValidationError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        let classification = classify(name);
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            emoji: classification.emoji,
            category: classification.category,
        })
    }
}
