use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user as returned by the API and persisted in the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Email address used to sign in.
    #[serde(default)]
    pub email: String,

    /// Public URL of the avatar image, absent until one is uploaded.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserSummary {
    /// First name, used by the dashboard greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Credentials submitted by the sign-in form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Payload submitted by the sign-up form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRequest {
    /// Display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Response of `POST /sessions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    /// The authenticated user.
    pub user: UserSummary,

    /// Bearer token for subsequent requests.
    pub token: String,
}
