//! Inventory state layer.
//!
//! # Responsibility
//! - Own both item shelves and the switch-over between them.
//! - Expose the add/remove/filter contract for one session.
//!
//! # Invariants
//! - Exactly one store instance per logical session, constructed explicitly;
//!   no ambient/global mutable state.
//! - All mutations are synchronous and serialized by the caller.

pub mod inventory;
