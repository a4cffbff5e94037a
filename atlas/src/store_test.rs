use super::*;
use crate::storage::MemoryStorage;

const KEY: &str = "mapData";

/// Storage whose writes always fail; reads see nothing.
#[derive(Debug, Default)]
struct FullStorage;

impl StorageAdapter for FullStorage {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".into()))
    }
}

fn store_with(raw: &str) -> LocationStore<MemoryStorage> {
    LocationStore::open(MemoryStorage::new().with_entry(KEY, raw), KEY)
}

fn sample() -> Vec<SavedLocation> {
    vec![
        SavedLocation::new(13.08, 80.24, 4),
        SavedLocation::new(12.97, 77.59, 9),
        SavedLocation::new(-33.87, 151.21, 6),
    ]
}

// =============================================================
// load_all
// =============================================================

#[test]
fn load_without_stored_key_is_empty() {
    let store = LocationStore::open(MemoryStorage::new(), KEY);
    assert!(store.is_empty());
}

#[test]
fn load_corrupted_json_is_empty() {
    let store = store_with("{not valid");
    assert!(store.is_empty());
}

#[test]
fn load_json_null_is_empty() {
    let store = store_with("null");
    assert!(store.is_empty());
}

#[test]
fn load_wrong_shape_is_empty() {
    let store = store_with(r#"{"latitude":1,"longitude":2,"zoom":3}"#);
    assert!(store.is_empty());
}

#[test]
fn load_reads_legacy_string_coordinates() {
    let store = store_with(r#"[{"latitude":"13.08","longitude":"80.24","zoom":4}]"#);
    assert_eq!(store.entries(), &[SavedLocation::new(13.08, 80.24, 4)]);
}

#[test]
fn load_with_one_unparseable_string_discards_whole_document() {
    let raw = r#"[{"latitude":"13.08","longitude":"80.24","zoom":4},{"latitude":"north","longitude":"77.59","zoom":9}]"#;
    let mut store = store_with(raw);
    assert!(store.is_empty());

    assert!(store.add(SavedLocation::new(19.08, 72.88, 5)));
    assert_eq!(store.storage().get(KEY), Some(r#"[{"latitude":19.08,"longitude":72.88,"zoom":5}]"#));
}

#[test]
fn persist_then_load_round_trips() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    for loc in sample() {
        assert!(store.add(loc));
    }

    let reopened = LocationStore::open(store.storage().clone(), KEY);
    assert_eq!(reopened.entries(), sample().as_slice());
}

#[test]
fn load_all_replaces_in_memory_list() {
    let mut store = store_with("[]");
    let mut storage = store.storage().clone();
    storage.write(KEY, r#"[{"latitude":1.5,"longitude":2.5,"zoom":3}]"#).unwrap();
    store = LocationStore { storage, ..store };
    assert_eq!(store.load_all(), &[SavedLocation::new(1.5, 2.5, 3)]);
    assert_eq!(store.keyed().count(), 1);
}

// =============================================================
// add
// =============================================================

#[test]
fn add_appends_and_persists() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    assert!(store.add(SavedLocation::new(13.08, 80.24, 4)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.storage().get(KEY), Some(r#"[{"latitude":13.08,"longitude":80.24,"zoom":4}]"#));
}

#[test]
fn add_puts_new_entry_last() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    store.add(SavedLocation::new(1.0, 1.0, 1));
    store.add(SavedLocation::new(2.0, 2.0, 2));
    assert_eq!(store.entries().last(), Some(&SavedLocation::new(2.0, 2.0, 2)));
}

#[test]
fn add_rejects_same_latitude() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    assert!(store.add(SavedLocation::new(13.08, 80.24, 4)));
    let before = store.storage().get(KEY).map(str::to_owned);

    assert!(!store.add(SavedLocation::new(13.08, 10.0, 7)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.storage().get(KEY).map(str::to_owned), before);
}

#[test]
fn add_keeps_entry_when_write_fails() {
    let mut store = LocationStore::open(FullStorage, KEY);
    assert!(store.add(SavedLocation::new(13.08, 80.24, 4)));
    assert_eq!(store.len(), 1);
}

#[test]
fn persist_reports_write_failure() {
    let mut store = LocationStore::open(FullStorage, KEY);
    let err = store.persist().unwrap_err();
    assert!(err.to_string().contains("QuotaExceededError"));
}

// =============================================================
// remove_at
// =============================================================

#[test]
fn remove_at_removes_exactly_that_entry() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    for loc in sample() {
        store.add(loc);
    }

    let removed = store.remove_at(1);
    assert_eq!(removed, Some(SavedLocation::new(12.97, 77.59, 9)));
    assert_eq!(store.entries(), &[SavedLocation::new(13.08, 80.24, 4), SavedLocation::new(-33.87, 151.21, 6)]);

    let reopened = LocationStore::open(store.storage().clone(), KEY);
    assert_eq!(reopened.entries(), store.entries());
}

#[test]
fn remove_at_out_of_range_is_noop() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    store.add(SavedLocation::new(1.0, 1.0, 1));
    let before = store.storage().get(KEY).map(str::to_owned);

    assert_eq!(store.remove_at(5), None);
    assert_eq!(store.len(), 1);
    assert_eq!(store.storage().get(KEY).map(str::to_owned), before);
}

#[test]
fn remove_at_on_empty_store_writes_nothing() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    assert_eq!(store.remove_at(0), None);
    assert_eq!(store.storage().get(KEY), None);
}

#[test]
fn removing_last_entry_stores_empty_array() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    store.add(SavedLocation::new(1.0, 1.0, 1));
    store.remove_at(0);
    assert_eq!(store.storage().get(KEY), Some("[]"));
}

// =============================================================
// row keys
// =============================================================

#[test]
fn row_keys_follow_their_entries() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    for loc in sample() {
        store.add(loc);
    }
    let keys: Vec<_> = store.keyed().map(|(k, _)| k).collect();

    store.remove_at(0);
    let after: Vec<_> = store.keyed().map(|(k, _)| k).collect();
    assert_eq!(after, keys[1..].to_vec());
}

#[test]
fn row_keys_are_unique() {
    let mut store = LocationStore::open(MemoryStorage::new(), KEY);
    for loc in sample() {
        store.add(loc);
    }
    let keys: std::collections::HashSet<_> = store.keyed().map(|(k, _)| k).collect();
    assert_eq!(keys.len(), 3);
}

// =============================================================
// export
// =============================================================

#[test]
fn export_csv_single_entry() {
    let store = store_with(r#"[{"latitude":13.08,"longitude":80.24,"zoom":4}]"#);
    assert_eq!(store.export_csv(), "13.08,80.24,4");
}
