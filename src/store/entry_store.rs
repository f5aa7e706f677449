//! EntryStore implementation
//!
//! Two parallel `HashMap`s keyed by the same strings.

use std::collections::HashMap;

use super::{IndexSlot, Value};
use crate::hashing;

/// Number of distinct index slots computed by `build_index`
pub const INDEX_SLOTS: usize = 10;

/// Key → value store with a derivative metadata index
///
/// Invariant: `data` and `index` always hold the same key set.
#[derive(Debug, Default, Clone)]
pub struct EntryStore {
    /// Authoritative values
    data: HashMap<String, Value>,

    /// Per-key metadata, never consulted by lookups
    index: HashMap<String, IndexSlot>,
}

impl EntryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key, resetting its index slot to `Pending`
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        self.index.insert(key.clone(), IndexSlot::Pending);
        self.data.insert(key, value);
    }

    /// Look up a key. Absence is a normal outcome.
    pub fn search(&self, key: &str) -> Option<Value> {
        self.data.get(key).copied()
    }

    /// Remove a key from both maps
    ///
    /// Returns the removed value; deleting an absent key is a no-op.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        let removed = self.data.remove(key)?;
        self.index.remove(key);
        Some(removed)
    }

    /// Recompute the index slot of every key currently stored
    pub fn build_index(&mut self) {
        for key in self.data.keys() {
            let slot = hashing::bucket_of(key.as_bytes(), INDEX_SLOTS) as u8;
            self.index.insert(key.clone(), IndexSlot::Slot(slot));
        }

        tracing::trace!(keys = self.data.len(), "index rebuilt");
    }

    /// All `(key, value)` pairs, in no particular order
    pub fn items(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.data.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// All keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.keys().map(String::as_str)
    }

    /// The metadata slot for a key, if the key is stored
    pub fn index_slot(&self, key: &str) -> Option<IndexSlot> {
        self.index.get(key).copied()
    }

    /// The full metadata map
    pub fn index(&self) -> &HashMap<String, IndexSlot> {
        &self.index
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Extend<(String, Value)> for EntryStore {
    /// Later pairs overwrite earlier ones with the same key
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(String, Value)> for EntryStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
