//! Domain model for the session-scoped fridge inventory.
//!
//! # Responsibility
//! - Define the canonical item and recipe shapes used by core logic.
//! - Keep classification results embedded in items at creation time.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Items are immutable once created; edits are remove + add.

pub mod item;
pub mod recipe;
