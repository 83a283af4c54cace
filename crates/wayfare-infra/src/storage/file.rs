//! File-backed key/value store - persists across restarts on the local device.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use wayfare_core::ports::{KeyValueStore, StorageError};

/// Key/value store persisted as a single JSON object on disk.
///
/// The whole document is loaded on open and kept in memory; every mutation
/// rewrites the file through a temporary sibling and a rename, so a crash
/// mid-write leaves the previous document intact. The in-memory copy only
/// changes once the file write has succeeded.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the document at `path`. A missing file is an empty store.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let entries: HashMap<String, String> = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::Serialization(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StorageError::Read(format!("{}: {e}", path.display()))),
        };

        tracing::info!(path = %path.display(), keys = entries.len(), "Opened file storage");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the entries, write it out, then commit.
    async fn mutate<F>(&self, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let mut entries = self.entries.write().await;
        let mut next = entries.clone();
        change(&mut next);

        self.flush(&next).await?;
        *entries = next;
        Ok(())
    }

    async fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Write(format!("{}: {e}", parent.display())))?;
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StorageError::Write(format!("{}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::Write(format!("{}: {e}", self.path.display())))?;

        tracing::debug!(path = %self.path.display(), keys = entries.len(), "Storage flushed");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
        .await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.mutate(|entries| {
            entries.remove(key);
        })
        .await
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.mutate(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        })
        .await
    }
}
