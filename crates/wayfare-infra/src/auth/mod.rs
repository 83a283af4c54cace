//! Auth service implementations.

mod mock;

pub use mock::{MockAuthConfig, MockAuthService};
