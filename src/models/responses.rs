use serde::{Deserialize, Serialize};
use crate::models::domain::PublicUser;

/// Response envelope for the authentication endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Plain acknowledgement response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Validation error response with per-field detail
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub errors: validator::ValidationErrors,
    pub status_code: u16,
}

impl ValidationErrorResponse {
    pub fn new(errors: validator::ValidationErrors) -> Self {
        Self {
            error: "validation_failed".to_string(),
            message: "Validation failed".to_string(),
            errors,
            status_code: 400,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "userCount")]
    pub user_count: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
