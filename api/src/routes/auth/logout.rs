use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LogoutRequest, LogoutResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_error, missing_access_token};

use taskhub_core::repositories::{RevocationStore, SessionRepository, UserRepository};

use super::{bearer_token, AppState};

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the access token in the `Authorization` header and blocks the
/// session behind the refresh token. Repeating the call succeeds.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
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
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or invalid access token, invalid refresh token
/// - 500 Internal Server Error: Revocation or session store failure
pub async fn logout<U, S, V>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, V>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    V: RevocationStore + 'static,
{
    let Some(access_token) = bearer_token(&req) else {
        return missing_access_token();
    };

    if let Err(errors) = request.validate() {
        return handle_validation_error(&errors);
    }

    match state
        .auth_service
        .logout(access_token, &request.refresh_token)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
