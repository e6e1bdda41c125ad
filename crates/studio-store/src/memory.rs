//! In-memory storage backend.

use crate::{Storage, StoreError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// An in-memory store for tests and ephemeral sessions.
///
/// Clones share the same underlying map, so a test can hand one handle to a
/// cart, drop the cart, and read the surviving data back through another
/// handle — the same way a reload sees what the previous session wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned lock only means a writer panicked mid-test; the map
        // itself is still usable.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.read("cart").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        store.write("cart", b"[1,2,3]").unwrap();
        assert_eq!(store.read("cart").unwrap(), Some(b"[1,2,3]".to_vec()));
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.write("cart", b"{}").unwrap();
        assert_eq!(other.read("cart").unwrap(), Some(b"{}".to_vec()));
    }

    #[test]
    fn test_json_helpers_round_trip() {
        use crate::StorageExt;
        use serde::{Deserialize, Serialize};

        #[derive(Debug, Serialize, Deserialize, PartialEq)]
        struct Doc {
            version: u32,
        }

        let store = MemoryStore::new();
        store.set_json("doc", &Doc { version: 1 }).unwrap();
        assert_eq!(store.get_json::<Doc>("doc").unwrap(), Some(Doc { version: 1 }));
        assert_eq!(store.get_json::<Doc>("missing").unwrap(), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.write("cart", b"{}").unwrap();
        store.remove("cart").unwrap();
        store.remove("cart").unwrap();
        assert!(store.is_empty());
    }
}
