use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// This is the directory's authoritative shape. It never crosses the HTTP
/// boundary directly - handlers convert to [`PublicUser`] first so the
/// password cannot leak into a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(rename = "providerId", default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields supplied by callers when creating a user.
///
/// The directory assigns `id`, `interests` and `created_at` itself.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub provider: Option<String>,
    pub provider_id: Option<String>,
}

/// A user record as returned to API clients: everything except the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: u64,
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub provider: Option<String>,
    #[serde(rename = "providerId")]
    pub provider_id: Option<String>,
    pub interests: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            photo_url: user.photo_url,
            provider: user.provider,
            provider_id: user.provider_id,
            interests: user.interests,
            created_at: user.created_at,
        }
    }
}

/// Status of a directed connection between two users.
///
/// Connections are write-once per (issuer, target) pair; a repeat request
/// overwrites the status back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
}
