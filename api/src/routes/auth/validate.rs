use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::ValidateResponse;
use crate::handlers::error::{handle_domain_error, missing_token};

use taskhub_core::repositories::{RevocationStore, SessionRepository, UserRepository};

use super::{bearer_token, AppState};

/// Handler for POST /api/v1/auth/validate
///
/// Resolves the identity behind the access token in the `Authorization`
/// header. Used by the gateway on every authenticated request.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "user_id": "550e8400-e29b-41d4-a716-446655440000",
///     "email": "harry@hogwarts.edu",
///     "role": "user"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid, expired or revoked token
pub async fn validate<U, S, V>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, V>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    V: RevocationStore + 'static,
{
    let Some(access_token) = bearer_token(&req) else {
        return missing_token();
    };

    match state.auth_service.validate(access_token).await {
        Ok(user) => HttpResponse::Ok().json(ValidateResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}
