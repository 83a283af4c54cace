//! Key/value storage backends and backend selection.
//!
//! The backend is picked once, when the store is built, from [`StorageConfig`].

mod file;
mod memory;

#[cfg(feature = "redis")]
mod redis;

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use wayfare_core::ports::{KeyValueStore, StorageError};

pub use file::FileStore;
pub use memory::InMemoryStore;

#[cfg(feature = "redis")]
pub use self::redis::{RedisStore, RedisStoreConfig};

/// Returned when a storage backend name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown storage backend: {0}")]
pub struct ParseBackendError(String);

/// Which storage backend to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Volatile, process-local map.
    Memory,
    /// JSON document on local disk.
    File,
    /// Shared Redis instance.
    Redis,
}

impl FromStr for StorageBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "redis" => Ok(Self::Redis),
            _ => Err(ParseBackendError(s.to_string())),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Document path for the file backend.
    pub path: PathBuf,
    #[cfg(feature = "redis")]
    pub redis: RedisStoreConfig,
    /// Use an in-memory store if the configured backend cannot be opened.
    pub fallback_to_memory: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: PathBuf::from(".wayfare/storage.json"),
            #[cfg(feature = "redis")]
            redis: RedisStoreConfig::default(),
            fallback_to_memory: true,
        }
    }
}

impl StorageConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: std::env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|s| match s.parse() {
                    Ok(backend) => Some(backend),
                    Err(e) => {
                        tracing::warn!(error = %e, "Ignoring STORAGE_BACKEND");
                        None
                    }
                })
                .unwrap_or(defaults.backend),
            path: std::env::var("STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.path),
            #[cfg(feature = "redis")]
            redis: RedisStoreConfig::from_env(),
            fallback_to_memory: std::env::var("STORAGE_FALLBACK_TO_MEMORY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.fallback_to_memory),
        }
    }
}

/// Build the configured backend.
///
/// If it cannot be opened and `fallback_to_memory` is set, an
/// [`InMemoryStore`] is returned instead and the failure is logged.
pub async fn connect_storage(
    config: &StorageConfig,
) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    match open_backend(config).await {
        Ok(store) => Ok(store),
        Err(e) if config.fallback_to_memory => {
            tracing::error!(
                backend = ?config.backend,
                error = %e,
                "Storage backend unavailable. Using in-memory fallback."
            );
            Ok(Arc::new(InMemoryStore::new()))
        }
        Err(e) => Err(e),
    }
}

async fn open_backend(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::File => Ok(Arc::new(FileStore::open(&config.path).await?)),
        #[cfg(feature = "redis")]
        StorageBackend::Redis => Ok(Arc::new(RedisStore::new(config.redis.clone()).await?)),
        #[cfg(not(feature = "redis"))]
        StorageBackend::Redis => Err(StorageError::Connection(
            "built without the redis feature".to_string(),
        )),
    }
}
