//! Authentication store.
//!
//! Holds the signed-in session and mediates the three transitions that change
//! it: [`AuthStore::login`], [`AuthStore::logout`] and [`AuthStore::rehydrate`].
//! The session is persisted under three string keys so a restart can restore it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::User;
use crate::error::SessionError;
use crate::ports::{AuthError, AuthService, KeyValueStore};

/// Storage key holding the serialized [`User`].
pub const AUTH_USER_KEY: &str = "auth_user";
/// Storage key holding the raw session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key holding the raw tracking id.
pub const AUTH_GA_ID_KEY: &str = "auth_ga_id";

/// All persisted session keys, in write order.
pub const SESSION_KEYS: [&str; 3] = [AUTH_USER_KEY, AUTH_TOKEN_KEY, AUTH_GA_ID_KEY];

/// A complete session. User, token and tracking id exist together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    user: User,
    auth_token: String,
    ga_id: String,
}

/// Snapshot of the auth store, as the screens consume it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub auth_token: Option<String>,
    pub ga_id: Option<String>,
    pub is_logged_in: bool,
    /// A login or logout is in flight.
    pub is_loading: bool,
    /// Startup rehydration is running.
    pub is_hydrating: bool,
}

/// Clears its flag when dropped, including when the owning future is cancelled.
struct FlagGuard<'a>(&'a AtomicBool);

impl<'a> FlagGuard<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }

    /// Raise the flag only if it is currently down.
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Session store.
///
/// One instance is built at startup and shared with whatever drives the UI.
/// Transitions are single-flight: while one is running, `login` and `logout`
/// are rejected with [`SessionError::Busy`].
pub struct AuthStore {
    auth: Arc<dyn AuthService>,
    storage: Arc<dyn KeyValueStore>,
    session: RwLock<Option<Session>>,
    in_flight: AtomicBool,
    loading: AtomicBool,
    hydrating: AtomicBool,
}

impl AuthStore {
    /// Create an empty, logged-out store.
    pub fn new(auth: Arc<dyn AuthService>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            auth,
            storage,
            session: RwLock::new(None),
            in_flight: AtomicBool::new(false),
            loading: AtomicBool::new(false),
            hydrating: AtomicBool::new(false),
        }
    }

    /// Current state snapshot.
    pub async fn state(&self) -> AuthState {
        let session = self.session.read().await;
        let (user, auth_token, ga_id) = match session.as_ref() {
            Some(s) => (
                Some(s.user.clone()),
                Some(s.auth_token.clone()),
                Some(s.ga_id.clone()),
            ),
            None => (None, None, None),
        };

        AuthState {
            is_logged_in: session.is_some(),
            user,
            auth_token,
            ga_id,
            is_loading: self.loading.load(Ordering::Acquire),
            is_hydrating: self.hydrating.load(Ordering::Acquire),
        }
    }

    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Sign in, persist the session and switch to logged-in.
    ///
    /// On failure the previous session is left as it was.
    pub async fn login(&self) -> Result<(), SessionError> {
        let _flight = FlagGuard::try_acquire(&self.in_flight).ok_or(SessionError::Busy)?;
        let _loading = FlagGuard::raise(&self.loading);

        let response = self.auth.sign_in().await.map_err(|e| {
            tracing::error!(error = %e, "Login failed");
            e
        })?;

        match serde_json::to_string(&response.user) {
            Ok(user_json) => self.persist(AUTH_USER_KEY, &user_json).await,
            Err(e) => tracing::warn!(error = %e, "Failed to serialize user for storage"),
        }
        self.persist(AUTH_TOKEN_KEY, &response.auth_token).await;
        self.persist(AUTH_GA_ID_KEY, &response.ga_id).await;

        tracing::info!(user_id = %response.user.id, "Logged in");

        *self.session.write().await = Some(Session {
            user: response.user,
            auth_token: response.auth_token,
            ga_id: response.ga_id,
        });

        Ok(())
    }

    /// Sign out, drop the persisted keys and clear the session.
    ///
    /// On failure the session is left as it was.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let _flight = FlagGuard::try_acquire(&self.in_flight).ok_or(SessionError::Busy)?;
        let _loading = FlagGuard::raise(&self.loading);

        let accepted = self.auth.sign_out().await.map_err(|e| {
            tracing::error!(error = %e, "Logout failed");
            e
        })?;
        if !accepted {
            tracing::error!("Logout rejected by auth service");
            return Err(AuthError::Rejected.into());
        }

        if let Err(e) = self.storage.remove_many(&SESSION_KEYS).await {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }

        *self.session.write().await = None;
        tracing::info!("Logged out");

        Ok(())
    }

    /// Restore a persisted session at startup.
    ///
    /// Restores only when all three keys hold values and the user parses.
    /// Anything else (missing key, read error, bad JSON) leaves the store
    /// logged out. Never fails.
    pub async fn rehydrate(&self) {
        let Some(_flight) = FlagGuard::try_acquire(&self.in_flight) else {
            tracing::warn!("Skipping rehydration: another auth transition is in flight");
            return;
        };
        let _hydrating = FlagGuard::raise(&self.hydrating);

        let (user, auth_token, ga_id) = tokio::join!(
            self.storage.get(AUTH_USER_KEY),
            self.storage.get(AUTH_TOKEN_KEY),
            self.storage.get(AUTH_GA_ID_KEY),
        );

        let restored = match (user, auth_token, ga_id) {
            (Ok(Some(user)), Ok(Some(auth_token)), Ok(Some(ga_id)))
                if !user.is_empty() && !auth_token.is_empty() && !ga_id.is_empty() =>
            {
                match serde_json::from_str::<User>(&user) {
                    Ok(user) => Some(Session {
                        user,
                        auth_token,
                        ga_id,
                    }),
                    Err(e) => {
                        tracing::warn!(error = %e, "Persisted user is malformed; starting logged out");
                        None
                    }
                }
            }
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                tracing::warn!(error = %e, "Failed to read persisted session; starting logged out");
                None
            }
            _ => {
                tracing::debug!("No complete persisted session");
                None
            }
        };

        if let Some(session) = restored {
            tracing::info!(user_id = %session.user.id, "Session restored from storage");
            *self.session.write().await = Some(session);
        }
    }

    async fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value).await {
            tracing::warn!(key = %key, error = %e, "Failed to persist session value");
        }
    }
}
