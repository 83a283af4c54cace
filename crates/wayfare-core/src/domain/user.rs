use serde::{Deserialize, Serialize};

/// Signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar image reference (usually a URL).
    pub avatar: String,
}

/// Everything a successful sign-in hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    /// Opaque session token.
    pub auth_token: String,
    /// Secondary tracking identifier.
    pub ga_id: String,
}
