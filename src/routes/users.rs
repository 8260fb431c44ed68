use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    AddInterestRequest, ErrorResponse, HealthResponse, MessageResponse, PublicUser,
    ValidationErrorResponse,
};
use crate::routes::AppState;

/// Configure user and matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/users")
            .route("/{id}", web::get().to(get_user))
            .route("/{id}/interests", web::post().to(add_interest))
            .route("/{id}/matches", web::get().to(get_matches))
            .route("/{id}/connections", web::get().to(get_connections))
            .route("/{id}/connect/{buddyId}", web::post().to(connect)),
    );
}

fn user_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "user_not_found".to_string(),
        message: "User not found".to_string(),
        status_code: 404,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        user_count: state.directory.user_count(),
        timestamp: chrono::Utc::now(),
    })
}

/// Fetch a single user
///
/// GET /api/users/{id}
async fn get_user(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    let user_id = path.into_inner();

    match state.directory.get_user(user_id) {
        Some(user) => HttpResponse::Ok().json(PublicUser::from(user)),
        None => user_not_found(),
    }
}

/// Add an interest to a user
///
/// POST /api/users/{id}/interests
async fn add_interest(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: web::Json<AddInterestRequest>,
) -> impl Responder {
    let user_id = path.into_inner();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for interest request: {:?}", errors);
        return HttpResponse::BadRequest().json(ValidationErrorResponse::new(errors));
    }

    if state.directory.get_user(user_id).is_none() {
        return user_not_found();
    }

    state.directory.add_user_interest(user_id, &req.interest);

    HttpResponse::Ok().json(MessageResponse {
        message: "Interest added successfully".to_string(),
    })
}

/// Find buddies sharing an interest with the user
///
/// GET /api/users/{id}/matches
async fn get_matches(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    let user_id = path.into_inner();

    match state.resolver.find_matches(&state.directory, user_id) {
        Ok(matches) => {
            tracing::debug!("Returning {} matches for user {}", matches.len(), user_id);
            HttpResponse::Ok().json(matches)
        }
        Err(e) => {
            tracing::info!("Match lookup failed: {}", e);
            user_not_found()
        }
    }
}

/// List the user's outbound connections
///
/// GET /api/users/{id}/connections
async fn get_connections(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    let user_id = path.into_inner();

    if state.directory.get_user(user_id).is_none() {
        return user_not_found();
    }

    let connections: Vec<PublicUser> = state
        .directory
        .get_user_connections(user_id)
        .into_iter()
        .map(PublicUser::from)
        .collect();

    HttpResponse::Ok().json(connections)
}

/// Send a connection request to another user
///
/// POST /api/users/{id}/connect/{buddyId}
async fn connect(state: web::Data<AppState>, path: web::Path<(u64, u64)>) -> impl Responder {
    let (user_id, buddy_id) = path.into_inner();

    let user = state.directory.get_user(user_id);
    let buddy = state.directory.get_user(buddy_id);

    if user.is_none() || buddy.is_none() {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "user_not_found".to_string(),
            message: "User or buddy not found".to_string(),
            status_code: 404,
        });
    }

    state.directory.create_user_connection(user_id, buddy_id);
    tracing::info!("Connection request: {} -> {}", user_id, buddy_id);

    HttpResponse::Ok().json(MessageResponse {
        message: "Connection request sent".to_string(),
    })
}
