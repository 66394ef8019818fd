//! Name-based ingredient classification.
//!
//! # Responsibility
//! - Derive a display glyph and a category from free-text ingredient names.
//! - Stay total and deterministic over arbitrary input.
//!
//! # Invariants
//! - Classification is a pure function of the lower-cased, trimmed name.
//! - Category sets are tested in fixed priority order: dairy, then meat,
//!   then vegetable. Extensions to the tables must preserve this tie-break.
//! - Unknown names always resolve to the fallback glyph and `Other`.

use crate::model::item::Category;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Glyph shown for names absent from the emoji table.
pub const FALLBACK_EMOJI: &str = "🥘";

static EMOJI_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("milk", "🥛"),
        ("eggs", "🥚"),
        ("tomato", "🍅"),
        ("cheese", "🧀"),
        ("lettuce", "🥬"),
        ("bread", "🍞"),
        ("chicken", "🍗"),
        ("fish", "🐟"),
        ("rice", "🍚"),
        ("apple", "🍎"),
        ("banana", "🍌"),
        ("carrot", "🥕"),
        ("onion", "🧅"),
        ("potato", "🥔"),
    ])
});

const DAIRY_NAMES: &[&str] = &["milk", "cheese", "yogurt"];
const MEAT_NAMES: &[&str] = &["eggs", "meat", "chicken", "fish"];
const VEGETABLE_NAMES: &[&str] = &["lettuce", "tomato", "carrot", "onion", "potato"];

/// Result of classifying one ingredient name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub emoji: &'static str,
    pub category: Category,
}

/// Derives the display glyph and category for an ingredient name.
///
/// # Contract
/// - Lookup is case-insensitive and ignores surrounding whitespace.
/// - Simple plurals resolve to their table entry: the exact name is tried
///   first, then the name minus a trailing `es`, then minus a trailing `s`.
/// - Names with no table entry map to [`FALLBACK_EMOJI`] and `Other`.
pub fn classify(name: &str) -> Classification {
    let normalized = name.trim().to_lowercase();

    for candidate in lookup_candidates(&normalized) {
        if let Some(&emoji) = EMOJI_TABLE.get(candidate) {
            return Classification {
                emoji,
                category: category_for(candidate),
            };
        }
        // Category tables cover one name ("yogurt", "meat") that has no
        // dedicated glyph; still honor its category.
        let category = category_for(candidate);
        if category != Category::Other {
            return Classification {
                emoji: FALLBACK_EMOJI,
                category,
            };
        }
    }

    Classification {
        emoji: FALLBACK_EMOJI,
        category: Category::Other,
    }
}

/// Singular fallbacks tried after the exact name, in order.
fn lookup_candidates(normalized: &str) -> Vec<&str> {
    let mut candidates = vec![normalized];
    if let Some(stem) = normalized.strip_suffix("es") {
        if !stem.is_empty() {
            candidates.push(stem);
        }
    }
    if let Some(stem) = normalized.strip_suffix('s') {
        if !stem.is_empty() {
            candidates.push(stem);
        }
    }
    candidates
}

fn category_for(name: &str) -> Category {
    // Priority order matters: dairy wins over meat wins over vegetable.
    if DAIRY_NAMES.contains(&name) {
        Category::Dairy
    } else if MEAT_NAMES.contains(&name) {
        Category::Meat
    } else if VEGETABLE_NAMES.contains(&name) {
        Category::Vegetable
    } else {
        Category::Other
    }
}
