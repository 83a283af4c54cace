//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use wayfare_infra::{MockAuthConfig, StorageBackend, StorageConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub auth: MockAuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            auth: MockAuthConfig::from_env(),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        backend: Option<StorageBackend>,
        path: Option<PathBuf>,
    ) -> Self {
        if let Some(backend) = backend {
            self.storage.backend = backend;
        }
        if let Some(path) = path {
            self.storage.path = path;
        }
        self
    }
}
