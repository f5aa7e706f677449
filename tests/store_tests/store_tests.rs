//! EntryStore Tests
//!
//! Tests verify:
//! - Insert / overwrite / search
//! - Delete from both data and index
//! - Index placeholder and bulk rebuild
//! - Item enumeration

use std::collections::HashSet;

use keyindex::store::{EntryStore, IndexSlot, INDEX_SLOTS};

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = EntryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.items().count(), 0);
}

#[test]
fn test_insert_and_search() {
    let mut store = EntryStore::new();

    store.insert("alpha", 1);
    store.insert("beta", 2);

    assert_eq!(store.search("alpha"), Some(1));
    assert_eq!(store.search("beta"), Some(2));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_search_missing_key() {
    let mut store = EntryStore::new();
    store.insert("alpha", 1);

    assert_eq!(store.search("gamma"), None);
}

#[test]
fn test_insert_overwrites_existing() {
    let mut store = EntryStore::new();

    store.insert("key", 1);
    store.insert("key", 99);

    assert_eq!(store.search("key"), Some(99));
    assert_eq!(store.len(), 1);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_from_data_and_index() {
    let mut store = EntryStore::new();
    store.insert("alpha", 1);
    store.insert("beta", 2);
    store.build_index();

    assert_eq!(store.delete("alpha"), Some(1));

    assert_eq!(store.search("alpha"), None);
    assert!(!store.contains_key("alpha"));
    assert_eq!(store.index_slot("alpha"), None);
    assert!(!store.index().contains_key("alpha"));
    assert_eq!(store.search("beta"), Some(2));
}

#[test]
fn test_delete_missing_key_is_noop() {
    let mut store = EntryStore::new();
    store.insert("alpha", 1);

    assert_eq!(store.delete("nope"), None);
    assert_eq!(store.delete("nope"), None);

    assert_eq!(store.len(), 1);
    assert_eq!(store.index().len(), 1);
}

#[test]
fn test_insert_after_delete() {
    let mut store = EntryStore::new();
    store.insert("alpha", 1);
    store.delete("alpha");
    store.insert("alpha", 5);

    assert_eq!(store.search("alpha"), Some(5));
    assert_eq!(store.index_slot("alpha"), Some(IndexSlot::Pending));
}

// =============================================================================
// Index Tests
// =============================================================================

#[test]
fn test_insert_sets_pending_slot() {
    let mut store = EntryStore::new();
    store.insert("alpha", 1);

    assert_eq!(store.index_slot("alpha"), Some(IndexSlot::Pending));
}

#[test]
fn test_build_index_covers_every_key() {
    let mut store = EntryStore::new();
    for (i, key) in ["a", "bb", "ccc", "dddd", "eeeee"].iter().enumerate() {
        store.insert(*key, i as i64);
    }

    store.build_index();

    assert_eq!(store.index().len(), store.len());
    for key in store.keys() {
        match store.index_slot(key) {
            Some(IndexSlot::Slot(slot)) => assert!((slot as usize) < INDEX_SLOTS),
            other => panic!("expected computed slot for {key}, got {other:?}"),
        }
    }
}

#[test]
fn test_build_index_is_deterministic() {
    let mut a = EntryStore::new();
    let mut b = EntryStore::new();
    a.insert("same", 1);
    b.insert("same", 2);

    a.build_index();
    b.build_index();

    assert_eq!(a.index_slot("same"), b.index_slot("same"));
}

#[test]
fn test_overwrite_after_build_resets_slot() {
    let mut store = EntryStore::new();
    store.insert("alpha", 1);
    store.insert("beta", 2);
    store.build_index();

    store.insert("alpha", 10);

    assert_eq!(store.index_slot("alpha"), Some(IndexSlot::Pending));
    assert!(matches!(store.index_slot("beta"), Some(IndexSlot::Slot(_))));

    store.build_index();
    assert!(matches!(store.index_slot("alpha"), Some(IndexSlot::Slot(_))));
}

#[test]
fn test_index_not_consulted_by_search() {
    let mut store = EntryStore::new();
    store.insert("alpha", 1);

    // Pending slot, lookup still succeeds
    assert_eq!(store.search("alpha"), Some(1));
}

// =============================================================================
// Enumeration Tests
// =============================================================================

#[test]
fn test_items_reflect_contents() {
    let mut store = EntryStore::new();
    store.insert("a", 1);
    store.insert("b", 2);
    store.insert("c", 3);
    store.delete("b");

    let items: HashSet<(String, i64)> = store.items().map(|(k, v)| (k.to_string(), v)).collect();
    let expected: HashSet<(String, i64)> = [("a".to_string(), 1), ("c".to_string(), 3)].into_iter().collect();

    assert_eq!(items, expected);
}

#[test]
fn test_collect_keeps_last_duplicate() {
    let store: EntryStore = vec![
        ("dup".to_string(), 1),
        ("other".to_string(), 2),
        ("dup".to_string(), 3),
    ]
    .into_iter()
    .collect();

    assert_eq!(store.len(), 2);
    assert_eq!(store.search("dup"), Some(3));
}
