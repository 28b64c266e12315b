//! Concurrency-safe configuration map.
//!
//! Every operation takes the store's mutex once, so `clear` and `remove`
//! are atomic with respect to concurrent `get`/`set` from other sessions.
//! Uses parking_lot::Mutex so a panicking writer cannot poison the map.

use parking_lot::Mutex;
use std::collections::BTreeMap;

/// String-to-string configuration owned by a [`TableEnvironment`](crate::TableEnvironment).
#[derive(Debug, Default)]
pub struct ConfigStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl ConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.lock().insert(key.into(), value.into())
    }

    /// Remove `key`, returning the value it had.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.lock().remove(key)
    }

    /// Remove every entry, returning how many there were.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.lock();
        let removed = entries.len();
        entries.clear();
        removed
    }

    /// Whether `key` is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Point-in-time copy of all entries, ordered by key.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.lock().clone()
    }
}
