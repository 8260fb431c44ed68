use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    AuthResponse, ErrorResponse, LoginRequest, NewUser, ProviderCheckRequest, PublicUser,
    RegisterRequest, ValidationErrorResponse,
};
use crate::routes::AppState;
use crate::services::CreateOutcome;

/// Configure authentication routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/provider-check", web::post().to(provider_check)),
    );
}

/// Register a new email/password account
///
/// POST /api/auth/register
async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for register request: {:?}", errors);
        return HttpResponse::BadRequest().json(ValidationErrorResponse::new(errors));
    }

    let new_user = NewUser {
        email: req.email.clone(),
        password: Some(req.password.clone()),
        display_name: Some(req.display_name.clone()),
        photo_url: None,
        provider: Some("email".to_string()),
        provider_id: None,
    };

    match state.directory.register_user(new_user) {
        CreateOutcome::Created(user) => {
            tracing::info!("Registered user {} ({})", user.id, user.email);
            HttpResponse::Created().json(AuthResponse {
                message: "User registered successfully".to_string(),
                user: PublicUser::from(user),
            })
        }
        CreateOutcome::Exists(_) => {
            tracing::info!("Registration rejected, email already exists: {}", req.email);
            HttpResponse::Conflict().json(ErrorResponse {
                error: "duplicate_email".to_string(),
                message: "User already exists".to_string(),
                status_code: 409,
            })
        }
    }
}

/// Log in with email/password credentials
///
/// POST /api/auth/login
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for login request: {:?}", errors);
        return HttpResponse::BadRequest().json(ValidationErrorResponse::new(errors));
    }

    // Stored passwords are compared as-is; provider accounts carry no
    // password and can never log in this way.
    let authenticated = state
        .directory
        .get_user_by_email(&req.email)
        .filter(|user| user.password.as_deref() == Some(req.password.as_str()));

    match authenticated {
        Some(user) => {
            tracing::info!("User {} logged in", user.id);
            HttpResponse::Ok().json(AuthResponse {
                message: "Login successful".to_string(),
                user: PublicUser::from(user),
            })
        }
        None => {
            tracing::info!("Failed login attempt for {}", req.email);
            HttpResponse::Unauthorized().json(ErrorResponse {
                error: "invalid_credentials".to_string(),
                message: "Invalid credentials".to_string(),
                status_code: 401,
            })
        }
    }
}

/// Resolve a provider sign-in event to a directory record
///
/// POST /api/auth/provider-check
///
/// Safe to call on every external sign-in: the same verified identity always
/// resolves to the same user, creating it on first sight.
async fn provider_check(
    state: web::Data<AppState>,
    req: web::Json<ProviderCheckRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for provider-check request: {:?}", errors);
        return HttpResponse::BadRequest().json(ValidationErrorResponse::new(errors));
    }

    // Fall back to the email local part when the provider sent no name
    let display_name = req
        .display_name
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| req.email.split('@').next().map(str::to_string));

    let user = state.directory.find_or_create_provider_user(NewUser {
        email: req.email.clone(),
        password: None,
        display_name,
        photo_url: req.photo_url.clone(),
        provider: Some(req.provider.clone()),
        provider_id: Some(req.provider_id.clone()),
    });

    tracing::info!(
        "Provider check resolved {} to user {}",
        req.provider_id,
        user.id
    );

    HttpResponse::Ok().json(AuthResponse {
        message: "Authentication successful".to_string(),
        user: PublicUser::from(user),
    })
}
