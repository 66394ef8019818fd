//! Store event contract for presentation collaborators.
//!
//! # Responsibility
//! - Name the state transitions external collaborators may react to.
//! - Keep the engine free of toast/sound/animation I/O.
//!
//! # Invariants
//! - Events are emitted after the corresponding mutation has completed.
//! - Sink invocation is synchronous and fire-and-forget; sinks must not
//!   mutate the store re-entrantly.

use crate::model::item::Item;

/// Named state transition emitted by the inventory store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// First identity attachment of the session; fired exactly once.
    IdentityAttached,
    /// An item entered the active shelf. `scoped` is true when the
    /// identity-scoped shelf was active ("added to your fridge" vs "demo").
    ItemAdded { item: Item, scoped: bool },
    /// An item left the active shelf.
    ItemRemoved { scoped: bool },
    /// Door opened; sound/animation hook point.
    DoorOpened,
    /// Door closed; sound/animation hook point.
    DoorClosed,
}

/// Subscriber interface for store events.
///
/// Implementors render toasts, play sounds, or record transitions; the
/// engine does not know which.
pub trait EventSink {
    fn on_event(&self, event: &StoreEvent);
}
