//! Process-wide credential store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::key::StoreKey;
use super::secret::SecretValue;

/// Concurrency-safe mapping from [`StoreKey`] to [`SecretValue`].
///
/// One instance is shared (behind `Arc`) between the feed-consuming
/// writer and every inference-serving reader for the lifetime of the
/// process. Reads clone the value out, so no reference can be retained
/// past a concurrent `remove`; a cloned `SecretValue` scrubs itself
/// when the request that took it finishes.
///
/// Rotation is a plain `upsert` at an existing key: the map swap is
/// atomic under the write lock, so a concurrent reader sees either the
/// old value or the new one, never neither, and the displaced value is
/// zeroized when it drops.
///
/// # Thread Safety
///
/// Backed by a `parking_lot::RwLock` so many readers proceed in
/// parallel and writers hold the lock only for the map operation.
/// No I/O happens inside the critical section.
#[derive(Debug, Default)]
pub struct CredentialStore {
    entries: RwLock<HashMap<StoreKey, SecretValue>>,
}

impl CredentialStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Retrieve the secret for a key, if present
    pub fn get(&self, key: &StoreKey) -> Option<SecretValue> {
        let entries = self.entries.read();
        entries.get(key).cloned()
    }

    /// Insert or replace the secret at a key
    ///
    /// Returns `true` when an existing entry was replaced (a rotation),
    /// `false` on first insert. The displaced value is zeroized on drop.
    pub fn upsert(&self, key: StoreKey, value: SecretValue) -> bool {
        let mut entries = self.entries.write();
        entries.insert(key, value).is_some()
    }

    /// Remove the secret at a key, scrubbing it
    ///
    /// Removing an absent key is a defined no-op; returns whether an
    /// entry actually existed.
    pub fn remove(&self, key: &StoreKey) -> bool {
        let mut entries = self.entries.write();
        entries.remove(key).is_some()
    }

    /// Whether a key currently has an entry
    pub fn contains(&self, key: &StoreKey) -> bool {
        let entries = self.entries.read();
        entries.contains_key(key)
    }

    /// Number of stored credentials
    pub fn len(&self) -> usize {
        let entries = self.entries.read();
        entries.len()
    }

    /// Whether the store holds no credentials
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry, scrubbing each value
    ///
    /// Used at process shutdown; the store never self-evicts otherwise.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        entries.clear();
    }
}
