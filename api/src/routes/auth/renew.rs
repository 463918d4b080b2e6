use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{RenewAccessTokenResponse, RenewRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_error};

use taskhub_core::repositories::{RevocationStore, SessionRepository, UserRepository};

use super::AppState;

/// Handler for POST /api/v1/auth/renew
///
/// Mints a new access token from a refresh token. The refresh token itself
/// is not rotated.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "access_token_expires_at": "2025-08-14T10:15:00Z"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Invalid token, blocked or expired session
/// - 500 Internal Server Error: Session missing or store failure
pub async fn renew<U, S, V>(
    state: web::Data<AppState<U, S, V>>,
    request: web::Json<RenewRequest>,
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
        .renew_access_token(&request.refresh_token)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(RenewAccessTokenResponse::from(response)),
        Err(error) => handle_domain_error(&error),
    }
}
