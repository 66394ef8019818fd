//! Fixed recipe catalogue and possession-based matching.
//!
//! # Responsibility
//! - Provide the built-in demo catalogue.
//! - Decide which recipes the active shelf can satisfy.
//!
//! # Invariants
//! - Result ordering is catalogue order; no partial-match scoring.
//! - Ingredient matching is case-insensitive against item names.
//! - Matching is invoked on demand only, never reactively.

use crate::model::item::Item;
use crate::model::recipe::{Difficulty, Recipe};

/// Returns the fixed three-recipe demo catalogue.
///
/// Catalogue data is static; a fresh copy is returned so callers can hold
/// it without borrowing core state.
pub fn built_in_catalogue() -> Vec<Recipe> {
    vec![
        Recipe {
            name: "Fluffy Scrambled Eggs".to_string(),
            required_ingredients: vec!["Eggs".to_string(), "Milk".to_string()],
            instructions: "Beat eggs with milk, cook in butter over low heat, stirring constantly."
                .to_string(),
            prep_time: "5 mins".to_string(),
            difficulty: Difficulty::Easy,
        },
        Recipe {
            name: "Fresh Garden Salad".to_string(),
            required_ingredients: vec!["Lettuce".to_string(), "Tomatoes".to_string()],
            instructions: "Chop lettuce and tomatoes, toss with olive oil and vinegar.".to_string(),
            prep_time: "10 mins".to_string(),
            difficulty: Difficulty::Easy,
        },
        Recipe {
            name: "Quick Cheese Omelette".to_string(),
            required_ingredients: vec!["Eggs".to_string(), "Cheese".to_string()],
            instructions: "Beat eggs, cook in pan, add cheese, fold in half.".to_string(),
            prep_time: "8 mins".to_string(),
            difficulty: Difficulty::Easy,
        },
    ]
}

/// Returns the catalogue recipes whose ingredients the active shelf covers.
///
/// # Contract
/// - A recipe matches when every required ingredient name has a
///   case-insensitive match among active item names.
/// - Results keep catalogue order.
pub fn match_recipes(active: &[Item], catalogue: &[Recipe]) -> Vec<Recipe> {
    let owned: Vec<String> = active.iter().map(|item| item.name.to_lowercase()).collect();

    catalogue
        .iter()
        .filter(|recipe| {
            recipe
                .required_ingredients
                .iter()
                .all(|required| owned.iter().any(|name| name == &required.to_lowercase()))
        })
        .cloned()
        .collect()
}
