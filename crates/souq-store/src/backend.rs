//! Storage backends.
//!
//! A backend stores opaque blobs under string keys. The shipped backend is
//! [`MemoryStore`], which stands in for the per-browser key-value storage the
//! storefront persists into: data survives "page loads" (re-hydration from a
//! cloned handle) but not the process itself.

use crate::StoreError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Raw blob storage under string keys.
///
/// All operations are synchronous and best-effort from the caller's point of
/// view; errors carry enough context to log and move on.
pub trait StoreBackend {
    /// Get the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete the blob under `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` holds a blob.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys currently holding a blob.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// In-memory backend standing in for browser local storage.
///
/// Handles are cheap to clone and share the same underlying map, so a test
/// can persist through one handle and re-hydrate through another to simulate
/// a fresh page load against the same browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }
}

impl StoreBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries()?.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries()?.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("cart", b"[]").unwrap();
        assert_eq!(store.get("cart").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        store.set("user", b"{}").unwrap();
        store.delete("user").unwrap();
        assert!(!store.exists("user").unwrap());
        // Deleting again is fine.
        store.delete("user").unwrap();
    }

    #[test]
    fn test_clones_share_data() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("cart", b"[1]").unwrap();
        assert_eq!(other.get("cart").unwrap(), Some(b"[1]".to_vec()));
    }

    #[test]
    fn test_keys() {
        let store = MemoryStore::new();
        store.set("a", b"1").unwrap();
        store.set("b", b"2").unwrap();
        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }
}
