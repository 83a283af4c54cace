//! Authentication service port.

use async_trait::async_trait;

use crate::domain::AuthResponse;

/// Remote sign-in/sign-out calls. Neither call takes parameters.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in and receive the user, session token and tracking id.
    async fn sign_in(&self) -> Result<AuthResponse, AuthError>;

    /// Sign out. `Ok(false)` means the remote side refused.
    async fn sign_out(&self) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Auth service unavailable: {0}")]
    Unavailable(String),

    #[error("Request rejected by auth service")]
    Rejected,
}
