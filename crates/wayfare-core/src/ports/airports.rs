//! Airport lookup port.

use async_trait::async_trait;

use crate::domain::Airport;

/// Read-only airport directory used by the location pickers.
#[async_trait]
pub trait AirportSource: Send + Sync {
    async fn airports(&self) -> Result<Vec<Airport>, AirportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AirportError {
    #[error("Airport lookup failed: {0}")]
    Lookup(String),
}
