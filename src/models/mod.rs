// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ConnectionStatus, NewUser, PublicUser, User};
pub use requests::{AddInterestRequest, LoginRequest, ProviderCheckRequest, RegisterRequest};
pub use responses::{
    AuthResponse, ErrorResponse, HealthResponse, MessageResponse, ValidationErrorResponse,
};
