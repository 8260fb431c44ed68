use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new email/password account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 2, message = "Display name must be at least 2 characters"))]
    #[serde(alias = "display_name", rename = "displayName")]
    pub display_name: String,
}

/// Request to log in with email/password credentials
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request to resolve a third-party sign-in event against the directory
///
/// The identity provider has already verified the caller; this endpoint only
/// maps the verified identity onto a directory record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderCheckRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(alias = "provider_id", rename = "providerId")]
    pub provider_id: String,
    #[validate(length(min = 1))]
    pub provider: String,
    #[serde(alias = "display_name", rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(alias = "photo_url", rename = "photoURL", default)]
    pub photo_url: Option<String>,
}

/// Request to add an interest to a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddInterestRequest {
    #[validate(length(min = 1, message = "Interest must not be empty"))]
    pub interest: String,
}
