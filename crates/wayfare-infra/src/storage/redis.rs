//! Redis key/value store with connection pooling.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use wayfare_core::ports::{KeyValueStore, StorageError};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisStoreConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Prefix applied to every key, so several apps can share one instance
    pub key_prefix: String,
}

impl Default for RedisStoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            key_prefix: "wayfare:".to_string(),
        }
    }
}

impl RedisStoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            key_prefix: std::env::var("REDIS_KEY_PREFIX").unwrap_or_else(|_| "wayfare:".to_string()),
        }
    }
}

/// Redis-backed key/value store.
///
/// Uses connection manager for automatic reconnection and pooling.
pub struct RedisStore {
    conn: ConnectionManager,
    config: RedisStoreConfig,
}

impl RedisStore {
    pub async fn new(config: RedisStoreConfig) -> Result<Self, StorageError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StorageError::Connection("Connection timed out".to_string()))?
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis storage");

        Ok(Self { conn, config })
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.config.key_prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(self.key(key), value)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(self.key(key))
            .await
            .map_err(|e| {
                tracing::warn!(key = %key, error = %e, "Redis GET failed");
                StorageError::Read(e.to_string())
            })
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(self.key(key))
            .await
            .map_err(|e| StorageError::Write(e.to_string()))
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        if keys.is_empty() {
            return Ok(());
        }

        let keys: Vec<String> = keys.iter().map(|k| self.key(k)).collect();
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(keys)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))
    }
}
