//! Store-level error types.

use thiserror::Error;

use crate::ports::AuthError;

/// Errors returned by auth store transitions.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Another auth transition is already in flight")]
    Busy,

    #[error(transparent)]
    Auth(#[from] AuthError),
}
