use fridgekit_core::{
    Category, IdentityHandle, InventoryStore, Shelf, StoreError, STARTER_NAMES,
};
use uuid::Uuid;

fn wallet() -> IdentityHandle {
    IdentityHandle::new("0x3f9B873aC41E33054e6aF55221aA0e5aFf8d72EC")
}

fn active_names(store: &InventoryStore) -> Vec<&str> {
    store.active().iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn demo_shelf_is_active_and_seeded_before_any_attachment() {
    let store = InventoryStore::new();

    assert_eq!(store.active_shelf(), Shelf::Demo);
    assert!(!store.is_identity_attached());
    assert_eq!(active_names(&store), STARTER_NAMES);
}

#[test]
fn first_attachment_seeds_personal_shelf_in_starter_order() {
    let mut store = InventoryStore::new();
    store.attach_identity(wallet());

    assert_eq!(store.active_shelf(), Shelf::Personal);
    assert_eq!(active_names(&store), STARTER_NAMES);

    // Seeded items are fresh copies, not shared with the demo shelf.
    store.detach_identity();
    let demo_ids: Vec<_> = store.active().iter().map(|item| item.id).collect();
    store.attach_identity(wallet());
    assert!(store.active().iter().all(|item| !demo_ids.contains(&item.id)));
}

#[test]
fn reattach_does_not_reseed_even_after_removals() {
    let mut store = InventoryStore::new();
    store.attach_identity(wallet());

    let milk_id = store.active()[0].id;
    store.remove_item(milk_id).unwrap();
    assert_eq!(store.active().len(), STARTER_NAMES.len() - 1);

    store.detach_identity();
    store.attach_identity(wallet());
    assert_eq!(store.active().len(), STARTER_NAMES.len() - 1);
    assert!(!active_names(&store).contains(&"Milk"));
}

#[test]
fn redundant_attach_is_a_no_op() {
    let mut store = InventoryStore::new();
    store.attach_identity(wallet());
    store.add_item("Carrot").unwrap();

    store.attach_identity(IdentityHandle::new("0xother"));
    assert_eq!(store.identity(), Some(&wallet()));
    assert!(active_names(&store).contains(&"Carrot"));
}

#[test]
fn blank_add_is_rejected_without_state_change() {
    let mut store = InventoryStore::new();
    let before = store.active().to_vec();

    assert_eq!(store.add_item("").unwrap_err(), StoreError::EmptyName);
    assert_eq!(store.add_item("   ").unwrap_err(), StoreError::EmptyName);
    assert_eq!(store.active(), &before[..]);
}

#[test]
fn duplicate_names_create_independent_items() {
    let mut store = InventoryStore::new();

    let first = store.add_item("Eggs").unwrap();
    let second = store.add_item("eggs").unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.emoji, second.emoji);
    assert_eq!(first.category, second.category);

    // Removal targets exactly the identified duplicate.
    store.remove_item(first.id).unwrap();
    assert!(store.active().iter().all(|item| item.id != first.id));
    assert!(store.active().iter().any(|item| item.id == second.id));
}

#[test]
fn remove_unknown_id_is_rejected_without_state_change() {
    let mut store = InventoryStore::new();
    let before = store.active().to_vec();
    let unknown = Uuid::new_v4();

    let err = store.remove_item(unknown).unwrap_err();
    assert_eq!(err, StoreError::NotFound(unknown));
    assert_eq!(store.active(), &before[..]);
}

#[test]
fn removal_preserves_order_of_survivors() {
    let mut store = InventoryStore::new();
    let eggs_id = store.active()[1].id;
    store.remove_item(eggs_id).unwrap();

    assert_eq!(
        active_names(&store),
        vec!["Milk", "Tomatoes", "Cheese", "Lettuce"]
    );
}

#[test]
fn shelves_stay_independent_across_switches() {
    let mut store = InventoryStore::new();
    store.add_item("Bread").unwrap();

    store.attach_identity(wallet());
    assert!(!active_names(&store).contains(&"Bread"));

    store.add_item("Rice").unwrap();
    store.detach_identity();
    assert!(active_names(&store).contains(&"Bread"));
    assert!(!active_names(&store).contains(&"Rice"));

    store.attach_identity(wallet());
    assert!(active_names(&store).contains(&"Rice"));
}

#[test]
fn by_category_filters_active_shelf_in_insertion_order() {
    let mut store = InventoryStore::new();
    store.add_item("Carrot").unwrap();

    let vegetables = store.by_category(Category::Vegetable);
    let names: Vec<&str> = vegetables.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Tomatoes", "Lettuce", "Carrot"]);

    let dairy = store.by_category(Category::Dairy);
    let names: Vec<&str> = dairy.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Milk", "Cheese"]);
}
