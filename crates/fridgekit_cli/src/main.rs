//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one deterministic demo session to verify `fridgekit_core` wiring.
//! - Keep output stable for quick local sanity checks.

use fridgekit_core::{built_in_catalogue, match_recipes, InventoryStore};

fn main() {
    println!("fridgekit_core version={}", fridgekit_core::core_version());

    let mut store = InventoryStore::new();
    println!("shelf={:?} items={}", store.active_shelf(), store.active().len());
    for item in store.active() {
        println!("  {} {} ({})", item.emoji, item.name, item.category.as_str());
    }

    match store.add_item("Carrot") {
        Ok(item) => println!("added {} {}", item.emoji, item.name),
        Err(err) => println!("add rejected: {err}"),
    }

    let recipes = match_recipes(store.active(), &built_in_catalogue());
    println!("matching recipes={}", recipes.len());
    for recipe in recipes {
        println!("  {} [{} / {}]", recipe.name, recipe.prep_time, recipe.difficulty.as_str());
    }
}
