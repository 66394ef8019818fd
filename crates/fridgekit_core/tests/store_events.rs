use fridgekit_core::{
    DoorState, EventSink, IdentityHandle, InventoryStore, StoreEvent,
};
use std::sync::{Arc, Mutex};

/// Records every emitted event, standing in for toast/sound collaborators.
#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<StoreEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().expect("sink lock should not be poisoned").clone()
    }
}

impl EventSink for RecordingSink {
    fn on_event(&self, event: &StoreEvent) {
        self.events
            .lock()
            .expect("sink lock should not be poisoned")
            .push(event.clone());
    }
}

fn store_with_sink() -> (InventoryStore, Arc<RecordingSink>) {
    let mut store = InventoryStore::new();
    let sink = Arc::new(RecordingSink::default());
    store.subscribe(Arc::clone(&sink) as Arc<dyn EventSink>);
    (store, sink)
}

#[test]
fn identity_attached_fires_exactly_once_per_session() {
    let (mut store, sink) = store_with_sink();

    store.attach_identity(IdentityHandle::new("0xwallet"));
    store.detach_identity();
    store.attach_identity(IdentityHandle::new("0xwallet"));
    store.attach_identity(IdentityHandle::new("0xwallet"));

    let attached_count = sink
        .events()
        .iter()
        .filter(|event| matches!(event, StoreEvent::IdentityAttached))
        .count();
    assert_eq!(attached_count, 1);
}

#[test]
fn add_and_remove_carry_the_scoped_flag() {
    let (mut store, sink) = store_with_sink();

    let demo_item = store.add_item("Bread").unwrap();
    store.remove_item(demo_item.id).unwrap();

    store.attach_identity(IdentityHandle::new("0xwallet"));
    let personal_item = store.add_item("Rice").unwrap();
    store.remove_item(personal_item.id).unwrap();

    let events = sink.events();
    assert_eq!(
        events[0],
        StoreEvent::ItemAdded {
            item: demo_item,
            scoped: false
        }
    );
    assert_eq!(events[1], StoreEvent::ItemRemoved { scoped: false });
    assert_eq!(events[2], StoreEvent::IdentityAttached);
    assert_eq!(
        events[3],
        StoreEvent::ItemAdded {
            item: personal_item,
            scoped: true
        }
    );
    assert_eq!(events[4], StoreEvent::ItemRemoved { scoped: true });
}

#[test]
fn rejected_operations_emit_nothing() {
    let (mut store, sink) = store_with_sink();

    let _ = store.add_item("   ");
    let _ = store.remove_item(uuid::Uuid::new_v4());

    assert!(sink.events().is_empty());
}

#[test]
fn door_toggles_emit_open_and_close_hooks() {
    let (mut store, sink) = store_with_sink();
    assert_eq!(store.door(), DoorState::Closed);

    assert_eq!(store.toggle_door(), DoorState::Open);
    assert_eq!(store.toggle_door(), DoorState::Closed);

    assert_eq!(
        sink.events(),
        vec![StoreEvent::DoorOpened, StoreEvent::DoorClosed]
    );
}

#[test]
fn every_registered_sink_sees_each_event() {
    let mut store = InventoryStore::new();
    let first = Arc::new(RecordingSink::default());
    let second = Arc::new(RecordingSink::default());
    store.subscribe(Arc::clone(&first) as Arc<dyn EventSink>);
    store.subscribe(Arc::clone(&second) as Arc<dyn EventSink>);

    store.add_item("Apple").unwrap();

    assert_eq!(first.events(), second.events());
    assert_eq!(first.events().len(), 1);
}
