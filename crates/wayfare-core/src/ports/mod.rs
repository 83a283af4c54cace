//! Ports - trait definitions for external dependencies.
//! Infrastructure crates provide the implementations.

mod airports;
mod auth;
mod storage;

pub use airports::{AirportError, AirportSource};
pub use auth::{AuthError, AuthService};
pub use storage::{KeyValueStore, StorageError};
