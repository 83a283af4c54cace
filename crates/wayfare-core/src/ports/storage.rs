//! Key/value storage port.

use async_trait::async_trait;

/// Key/value storage - abstraction over the persistent backends
/// (local file, Redis, in-memory).
///
/// `get` separates the three outcomes callers care about: `Ok(Some(_))` for a
/// stored value, `Ok(None)` for an absent key and `Err(_)` for a failed read.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Read a value.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove several keys in one batch.
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError>;
}

/// Storage operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Read failed: {0}")]
    Read(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
