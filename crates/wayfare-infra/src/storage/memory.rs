//! In-memory key/value store - volatile, used for tests and as fallback.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use wayfare_core::ports::{KeyValueStore, StorageError};

/// Key/value store backed by a `HashMap` behind an async `RwLock`.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryStore::new();
        store.set("key1", "value1").await.unwrap();
        assert_eq!(store.get("key1").await.unwrap(), Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = InMemoryStore::new();
        store.set("key1", "old").await.unwrap();
        store.set("key1", "new").await.unwrap();
        assert_eq!(store.get("key1").await.unwrap(), Some("new".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryStore::new();
        store.set("key1", "value1").await.unwrap();
        store.remove("key1").await.unwrap();
        store.remove("key1").await.unwrap();
        assert_eq!(store.get("key1").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_remove_many_only_touches_listed_keys() {
        let store = InMemoryStore::new();
        for key in ["key1", "key2", "key3", "keep"] {
            store.set(key, "v").await.unwrap();
        }

        store.remove_many(&["key1", "key2", "key3"]).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("keep").await.unwrap(), Some("v".to_string()));
    }
}
