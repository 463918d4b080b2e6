use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{SignupRequest, SignupResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_error};

use taskhub_core::repositories::{RevocationStore, SessionRepository, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/signup
///
/// Registers a new user with the default role.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Harry Potter",
///     "email": "harry@hogwarts.edu",
///     "password": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "name": "Harry Potter",
///     "email": "harry@hogwarts.edu",
///     "role": "user",
///     "created_at": "2025-08-14T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid body or password too short
/// - 409 Conflict: Email already registered
/// - 500 Internal Server Error: Credential store failure
pub async fn signup<U, S, V>(
    state: web::Data<AppState<U, S, V>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    V: RevocationStore + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(&errors);
    }

    match state
        .auth_service
        .signup(&request.name, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(SignupResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}
