use super::*;
use crate::storage::MemoryStorage;

fn store() -> LocationStore<MemoryStorage> {
    let raw = r#"[{"latitude":13.08,"longitude":80.24,"zoom":4},{"latitude":12.97,"longitude":77.59,"zoom":9}]"#;
    LocationStore::open(MemoryStorage::new().with_entry("mapData", raw), "mapData")
}

#[test]
fn rows_follow_stored_order() {
    let rows = rows(&store());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].index, 0);
    assert_eq!(rows[0].latitude(), "13.08");
    assert_eq!(rows[0].longitude(), "80.24");
    assert_eq!(rows[1].index, 1);
    assert_eq!(rows[1].latitude(), "12.97");
}

#[test]
fn rows_of_empty_store_is_empty() {
    let empty = LocationStore::open(MemoryStorage::new(), "mapData");
    assert!(rows(&empty).is_empty());
}

#[test]
fn row_keys_survive_removal_but_indexes_shift() {
    let mut store = store();
    let second_key = rows(&store)[1].key;

    store.remove_at(0);
    let after = rows(&store);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].key, second_key);
    assert_eq!(after[0].index, 0);
}
