//! # Wayfare Infrastructure
//!
//! Concrete implementations of the ports defined in `wayfare-core`:
//! key/value storage backends, the demo auth service and airport sources.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, memory and file storage only
//! - `redis` - Redis-backed key/value storage

pub mod airports;
pub mod auth;
pub mod storage;

pub use airports::{CachedAirportSource, StaticAirportSource};
pub use auth::{MockAuthConfig, MockAuthService};
pub use storage::{
    FileStore, InMemoryStore, ParseBackendError, StorageBackend, StorageConfig, connect_storage,
};

#[cfg(feature = "redis")]
pub use storage::{RedisStore, RedisStoreConfig};
