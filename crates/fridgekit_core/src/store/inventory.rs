//! Session-scoped inventory store.
//!
//! # Responsibility
//! - Hold the demo and personal shelves and select the active one.
//! - Perform add/remove/filter operations and emit change events.
//! - Seed shelves from the fixed starter set at the right moments.
//!
//! # Invariants
//! - The demo shelf is seeded once at construction and never reseeded.
//! - The personal shelf is seeded on the first attachment of the session,
//!   exactly once; detach/reattach cycles never reseed it.
//! - Shelves never copy or merge items between each other.
//! - Insertion order is preserved; removal does not reorder survivors.
//! - Rejected operations leave the store unchanged.

use crate::events::{EventSink, StoreEvent};
use crate::identity::IdentityHandle;
use crate::model::item::{Category, Item, ItemId, ItemValidationError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Names used to seed a fresh shelf, in display order.
pub const STARTER_NAMES: &[&str] = &["Milk", "Eggs", "Tomatoes", "Cheese", "Lettuce"];

pub type StoreResult<T> = Result<T, StoreError>;

/// Recoverable rejection returned to the caller; never leaves the store
/// partially mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Add was called with blank or whitespace-only text.
    EmptyName,
    /// Remove targeted an id absent from the active shelf.
    NotFound(ItemId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name cannot be empty"),
            Self::NotFound(id) => write!(f, "item not found on active shelf: {id}"),
        }
    }
}

impl Error for StoreError {}

impl From<ItemValidationError> for StoreError {
    fn from(value: ItemValidationError) -> Self {
        match value {
            ItemValidationError::EmptyName => Self::EmptyName,
        }
    }
}

/// Which of the two shelves is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    /// Anonymous demo shelf, active while no identity is attached.
    Demo,
    /// Identity-scoped shelf, active while an identity is attached.
    Personal,
}

/// Door state, exposed so collaborators can play open/close feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Open,
    Closed,
}

/// Session-scoped inventory engine.
///
/// One instance per session; callers pass it explicitly rather than reading
/// ambient state. All operations complete synchronously.
pub struct InventoryStore {
    demo: Vec<Item>,
    personal: Vec<Item>,
    personal_seeded: bool,
    identity: Option<IdentityHandle>,
    door: DoorState,
    sinks: Vec<Arc<dyn EventSink>>,
}

impl InventoryStore {
    /// Creates a store with the demo shelf seeded from the starter set.
    pub fn new() -> Self {
        Self {
            demo: seed_items(),
            personal: Vec::new(),
            personal_seeded: false,
            identity: None,
            door: DoorState::Closed,
            sinks: Vec::new(),
        }
    }

    /// Registers one event sink. Sinks are invoked synchronously, in
    /// registration order, after each state mutation completes.
    pub fn subscribe(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Attaches the external identity and activates the personal shelf.
    ///
    /// # Contract
    /// - First attachment of the session seeds the personal shelf from the
    ///   starter set and emits `StoreEvent::IdentityAttached`, exactly once.
    /// - Attaching while already attached is a no-op; the stored handle is
    ///   kept unchanged.
    pub fn attach_identity(&mut self, handle: IdentityHandle) {
        if self.identity.is_some() {
            return;
        }
        self.identity = Some(handle);

        if !self.personal_seeded {
            self.personal = seed_items();
            self.personal_seeded = true;
            info!(
                "event=identity_attached module=store status=ok seeded={}",
                self.personal.len()
            );
            self.emit(&StoreEvent::IdentityAttached);
        }
    }

    /// Detaches the identity and activates the demo shelf.
    ///
    /// Personal shelf contents survive untouched for the rest of the
    /// session. No-op while detached.
    pub fn detach_identity(&mut self) {
        self.identity = None;
    }

    pub fn is_identity_attached(&self) -> bool {
        self.identity.is_some()
    }

    /// Returns the attached identity handle, for display only.
    pub fn identity(&self) -> Option<&IdentityHandle> {
        self.identity.as_ref()
    }

    pub fn active_shelf(&self) -> Shelf {
        if self.identity.is_some() {
            Shelf::Personal
        } else {
            Shelf::Demo
        }
    }

    /// Returns the active shelf in insertion order. Never mutates.
    pub fn active(&self) -> &[Item] {
        match self.active_shelf() {
            Shelf::Demo => &self.demo,
            Shelf::Personal => &self.personal,
        }
    }

    /// Adds one classified item to the active shelf.
    ///
    /// # Contract
    /// - Trims `raw_name`; derives glyph/category through the classifier.
    /// - Appends to the active shelf and emits `StoreEvent::ItemAdded`.
    /// - Returns the created item.
    ///
    /// # Errors
    /// - `StoreError::EmptyName` when the trimmed name is empty; the shelf
    ///   is left unchanged.
    pub fn add_item(&mut self, raw_name: &str) -> StoreResult<Item> {
        let item = Item::new(raw_name)?;
        let scoped = self.active_shelf() == Shelf::Personal;

        let shelf = self.active_mut();
        // A v4 id collision here is a programming error, not user input;
        // fail loudly instead of silently shadowing an existing item.
        debug_assert!(
            !shelf.iter().any(|existing| existing.id == item.id),
            "duplicate item id generated"
        );
        shelf.push(item.clone());

        info!(
            "event=item_added module=store status=ok scoped={scoped} category={}",
            item.category.as_str()
        );
        self.emit(&StoreEvent::ItemAdded {
            item: item.clone(),
            scoped,
        });
        Ok(item)
    }

    /// Removes exactly the identified item from the active shelf.
    ///
    /// # Errors
    /// - `StoreError::NotFound(id)` when the active shelf holds no such
    ///   item; the shelf is left unchanged.
    pub fn remove_item(&mut self, id: ItemId) -> StoreResult<()> {
        let scoped = self.active_shelf() == Shelf::Personal;
        let shelf = self.active_mut();

        let Some(position) = shelf.iter().position(|item| item.id == id) else {
            return Err(StoreError::NotFound(id));
        };
        shelf.remove(position);

        info!("event=item_removed module=store status=ok scoped={scoped}");
        self.emit(&StoreEvent::ItemRemoved { scoped });
        Ok(())
    }

    /// Filters the active shelf by category, preserving insertion order.
    pub fn by_category(&self, category: Category) -> Vec<&Item> {
        self.active()
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn door(&self) -> DoorState {
        self.door
    }

    /// Flips the door and emits the matching open/close event so feedback
    /// collaborators can react. Returns the new state.
    pub fn toggle_door(&mut self) -> DoorState {
        self.door = match self.door {
            DoorState::Open => DoorState::Closed,
            DoorState::Closed => DoorState::Open,
        };
        let event = match self.door {
            DoorState::Open => StoreEvent::DoorOpened,
            DoorState::Closed => StoreEvent::DoorClosed,
        };
        self.emit(&event);
        self.door
    }

    fn active_mut(&mut self) -> &mut Vec<Item> {
        match self.active_shelf() {
            Shelf::Demo => &mut self.demo,
            Shelf::Personal => &mut self.personal,
        }
    }

    fn emit(&self, event: &StoreEvent) {
        for sink in &self.sinks {
            sink.on_event(event);
        }
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a fresh copy of the starter set with newly generated ids.
fn seed_items() -> Vec<Item> {
    STARTER_NAMES
        .iter()
        .map(|name| Item::new(name).expect("starter names are non-empty"))
        .collect()
}
