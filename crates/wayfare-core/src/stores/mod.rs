//! Client-side stores.
//!
//! Each store owns its record and is the only thing allowed to mutate it.
//! Stores are plain constructed values; callers share them by reference
//! (or `Arc`) instead of reaching for a process-wide singleton.

mod auth;
mod search;
mod ui;

#[cfg(test)]
mod test_support;

pub use auth::{
    AUTH_GA_ID_KEY, AUTH_TOKEN_KEY, AUTH_USER_KEY, AuthState, AuthStore, SESSION_KEYS,
};
pub use search::SearchStore;
pub use ui::UiStore;
