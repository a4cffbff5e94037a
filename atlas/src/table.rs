//! Row view-models for the saved-location table.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use uuid::Uuid;

use crate::location::SavedLocation;
use crate::storage::StorageAdapter;
use crate::store::LocationStore;

/// One rendered row. `index` is the position passed back to row actions;
/// `key` is stable across removals and only used for keyed rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: Uuid,
    pub index: usize,
    pub location: SavedLocation,
}

impl TableRow {
    #[must_use]
    pub fn latitude(&self) -> String {
        self.location.latitude.to_string()
    }

    #[must_use]
    pub fn longitude(&self) -> String {
        self.location.longitude.to_string()
    }
}

/// Rows in stored order.
#[must_use]
pub fn rows<S: StorageAdapter>(store: &LocationStore<S>) -> Vec<TableRow> {
    store
        .keyed()
        .enumerate()
        .map(|(index, (key, location))| TableRow { key, index, location: *location })
        .collect()
}
