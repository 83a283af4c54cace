//! Application state - the stores and collaborators every command shares.

use std::sync::Arc;

use wayfare_core::ports::{AirportSource, AuthService, KeyValueStore};
use wayfare_core::stores::AuthStore;
use wayfare_infra::{CachedAirportSource, MockAuthService, StaticAirportSource, connect_storage};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthStore>,
    pub airports: Arc<dyn AirportSource>,
}

impl AppState {
    /// Build the application state with the configured implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let storage = connect_storage(&config.storage).await?;
        let auth_service: Arc<dyn AuthService> =
            Arc::new(MockAuthService::new(config.auth.clone()));
        let airports: Arc<dyn AirportSource> = Arc::new(CachedAirportSource::from_env(
            Arc::new(StaticAirportSource::from_env()),
        ));

        tracing::debug!(backend = ?config.storage.backend, "Application state initialized");

        Ok(Self::from_parts(auth_service, storage, airports))
    }

    pub fn from_parts(
        auth_service: Arc<dyn AuthService>,
        storage: Arc<dyn KeyValueStore>,
        airports: Arc<dyn AirportSource>,
    ) -> Self {
        Self {
            auth: Arc::new(AuthStore::new(auth_service, storage)),
            airports,
        }
    }
}
