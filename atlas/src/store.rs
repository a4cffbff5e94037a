//! Ordered list of saved locations mirrored to a [`StorageAdapter`].
//!
//! DESIGN
//! ======
//! The in-memory list is authoritative. Storage is a whole-document mirror:
//! every mutation serializes the full list and overwrites the stored value.
//! A failed write is logged and the in-memory list is kept, so the board
//! stays usable when storage is full or disabled.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use uuid::Uuid;

use crate::error::StorageError;
use crate::export::to_csv;
use crate::location::SavedLocation;
use crate::storage::StorageAdapter;

/// Decode a stored document. Absent, unreadable, or malformed content all
/// map to an empty list at the call site.
fn decode(raw: &str) -> Result<Vec<SavedLocation>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Saved locations in insertion order, plus a render key per entry.
#[derive(Debug, Clone)]
pub struct LocationStore<S> {
    storage: S,
    key: String,
    entries: Vec<SavedLocation>,
    /// Parallel to `entries`; never persisted.
    row_keys: Vec<Uuid>,
}

impl<S: StorageAdapter> LocationStore<S> {
    /// Create a store over `storage` and load whatever is under `key`.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self { storage, key: key.into(), entries: Vec::new(), row_keys: Vec::new() };
        store.load_all();
        store
    }

    /// Replace the in-memory list with the stored document.
    pub fn load_all(&mut self) -> &[SavedLocation] {
        let loaded = match self.storage.read(&self.key) {
            None => {
                log::debug!("no saved locations under {:?}", self.key);
                Vec::new()
            }
            Some(raw) => match decode(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("discarding malformed saved locations under {:?}: {e}", self.key);
                    Vec::new()
                }
            },
        };
        self.row_keys = loaded.iter().map(|_| Uuid::new_v4()).collect();
        self.entries = loaded;
        &self.entries
    }

    /// Append `loc` unless an entry with the same latitude exists.
    ///
    /// Returns `true` when the entry was inserted.
    pub fn add(&mut self, loc: SavedLocation) -> bool {
        if self.entries.iter().any(|e| e.same_key(&loc)) {
            log::debug!("latitude {} already saved", loc.latitude);
            return false;
        }
        self.entries.push(loc);
        self.row_keys.push(Uuid::new_v4());
        self.persist_logged();
        true
    }

    /// Remove the entry at `index`. Out-of-range indexes change nothing and
    /// write nothing.
    pub fn remove_at(&mut self, index: usize) -> Option<SavedLocation> {
        if index >= self.entries.len() {
            log::debug!("remove_at({index}) out of range for {} entries", self.entries.len());
            return None;
        }
        let removed = self.entries.remove(index);
        self.row_keys.remove(index);
        self.persist_logged();
        Some(removed)
    }

    /// Serialize the full list and overwrite the stored document.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.entries)?;
        self.storage.write(&self.key, &raw)
    }

    fn persist_logged(&mut self) {
        if let Err(e) = self.persist() {
            log::warn!("saved locations not persisted: {e}");
        }
    }

    #[must_use]
    pub fn export_csv(&self) -> String {
        to_csv(&self.entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[SavedLocation] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SavedLocation> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their render keys.
    pub fn keyed(&self) -> impl Iterator<Item = (Uuid, &SavedLocation)> {
        self.row_keys.iter().copied().zip(self.entries.iter())
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
