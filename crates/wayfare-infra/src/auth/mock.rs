//! Demo auth service - always succeeds after a fixed delay.

use std::time::Duration;

use async_trait::async_trait;

use wayfare_core::domain::{AuthResponse, User};
use wayfare_core::ports::{AuthError, AuthService};

/// Simulated round-trip times.
#[derive(Debug, Clone)]
pub struct MockAuthConfig {
    pub login_delay: Duration,
    pub logout_delay: Duration,
}

impl Default for MockAuthConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1000),
            logout_delay: Duration::from_millis(500),
        }
    }
}

impl MockAuthConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            login_delay: std::env::var("AUTH_LOGIN_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.login_delay),
            logout_delay: std::env::var("AUTH_LOGOUT_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.logout_delay),
        }
    }
}

/// Auth service that signs everyone in as the demo user.
pub struct MockAuthService {
    config: MockAuthConfig,
}

impl MockAuthService {
    pub fn new(config: MockAuthConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(MockAuthConfig::from_env())
    }

    pub fn demo_user() -> User {
        User {
            id: "1".to_string(),
            name: "Rukmoni".to_string(),
            email: "rukmoni@example.com".to_string(),
            avatar: "https://i.pravatar.cc/100?img=5".to_string(),
        }
    }
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new(MockAuthConfig::default())
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn sign_in(&self) -> Result<AuthResponse, AuthError> {
        tokio::time::sleep(self.config.login_delay).await;
        tracing::debug!("Mock sign-in completed");

        Ok(AuthResponse {
            user: Self::demo_user(),
            auth_token: "mock-auth-token-123".to_string(),
            ga_id: "mock-ga-id-456".to_string(),
        })
    }

    async fn sign_out(&self) -> Result<bool, AuthError> {
        tokio::time::sleep(self.config.logout_delay).await;
        tracing::debug!("Mock sign-out completed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_returns_demo_user_after_delay() {
        let service = MockAuthService::default();
        let started = Instant::now();

        let response = service.sign_in().await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(response.user, MockAuthService::demo_user());
        assert_eq!(response.auth_token, "mock-auth-token-123");
        assert_eq!(response.ga_id, "mock-ga-id-456");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_is_pending_before_delay() {
        let service = MockAuthService::default();

        let early = tokio::time::timeout(Duration::from_millis(500), service.sign_in()).await;

        assert!(early.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_out_succeeds_after_delay() {
        let service = MockAuthService::default();
        let started = Instant::now();

        assert!(service.sign_out().await.unwrap());
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
