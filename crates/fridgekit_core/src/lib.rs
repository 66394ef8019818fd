//! Core inventory engine for FridgeKit.
//! This crate is the single source of truth for inventory state rules;
//! rendering, audio, wallet connection, and toast presentation live outside.

pub mod classify;
pub mod donation;
pub mod events;
pub mod identity;
pub mod logging;
pub mod model;
pub mod recipes;
pub mod store;

pub use classify::{classify, Classification, FALLBACK_EMOJI};
pub use donation::{
    parse_ether, DonationError, DonationFlow, DonationResult, DonationState, DONATION_RECIPIENT,
    PRESET_AMOUNTS_ETH,
};
pub use events::{EventSink, StoreEvent};
pub use identity::IdentityHandle;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Category, Item, ItemId, ItemValidationError};
pub use model::recipe::{Difficulty, Recipe};
pub use recipes::{built_in_catalogue, match_recipes};
pub use store::inventory::{
    DoorState, InventoryStore, Shelf, StoreError, StoreResult, STARTER_NAMES,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
