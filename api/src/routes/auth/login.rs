use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginUserResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_error};

use taskhub_core::repositories::{RevocationStore, SessionRepository, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates by email and password and opens a session.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "harry@hogwarts.edu",
///     "password": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "session_id": "550e8400-e29b-41d4-a716-446655440000",
///     "access_token": "eyJ...",
///     "access_token_expires_at": "2025-08-14T10:15:00Z",
///     "refresh_token": "eyJ...",
///     "refresh_token_expires_at": "2025-08-15T10:00:00Z",
///     "user": { "name": "Harry Potter", "email": "harry@hogwarts.edu" }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid body
/// - 401 Unauthorized: Wrong password or inactive account
/// - 404 Not Found: Unknown email
/// - 500 Internal Server Error: Token or session store failure
pub async fn login<U, S, V>(
    state: web::Data<AppState<U, S, V>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    V: RevocationStore + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(&errors);
    }

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(response) => HttpResponse::Ok().json(LoginUserResponse::from(response)),
        Err(error) => handle_domain_error(&error),
    }
}
