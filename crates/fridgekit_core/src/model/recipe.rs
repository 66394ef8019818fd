//! Recipe domain model.
//!
//! # Responsibility
//! - Define the static recipe shape consumed by the matcher.
//!
//! # Invariants
//! - Recipes are catalogue data, never user-mutable.
//! - `required_ingredients` ordering is significant for display.

use serde::{Deserialize, Serialize};

/// Subjective preparation difficulty shown next to a recipe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// User-facing label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// One entry of the fixed recipe catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Ingredient names matched case-insensitively against item names.
    pub required_ingredients: Vec<String>,
    pub instructions: String,
    pub prep_time: String,
    pub difficulty: Difficulty,
}
