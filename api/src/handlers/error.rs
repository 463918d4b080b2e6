//! Maps domain errors onto HTTP responses

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use tracing::{error, warn};
use validator::ValidationErrors;

use taskhub_core::{DomainError, ErrorStatus};
use taskhub_shared::{error_codes, ErrorResponse};

/// HTTP status and wire error code for a transport-level status
pub fn status_parts(status: ErrorStatus) -> (StatusCode, &'static str) {
    match status {
        ErrorStatus::InvalidArgument => (StatusCode::BAD_REQUEST, error_codes::INVALID_ARGUMENT),
        ErrorStatus::NotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        ErrorStatus::AlreadyExists => (StatusCode::CONFLICT, error_codes::ALREADY_EXISTS),
        ErrorStatus::Unauthenticated => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHENTICATED),
        ErrorStatus::Internal => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR),
    }
}

/// Converts a domain error into an error response
///
/// Internal errors are logged with their full text; the client only ever
/// sees the public message.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code) = status_parts(error.status());

    if status.is_server_error() {
        error!(error = %error, "Request failed");
    } else {
        warn!(error = %error, status = status.as_u16(), "Request rejected");
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, error.public_message()))
}

/// Converts request body validation failures into a 400 response listing
/// the offending fields
pub fn handle_validation_error(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::INVALID_ARGUMENT, "Validation failed");

    for (field, field_errors) in errors.field_errors() {
        let codes: Vec<String> = field_errors.iter().map(|e| e.code.to_string()).collect();
        response = response.add_detail(field.to_string(), codes);
    }

    HttpResponse::BadRequest().json(response)
}

/// Error handler for malformed JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(error_codes::INVALID_ARGUMENT, message));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Response for requests without a usable bearer token
pub fn missing_token() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(
        error_codes::UNAUTHENTICATED,
        "Authorization header is missing",
    ))
}

/// Response for a logout request that carries no access token
pub fn missing_access_token() -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::INVALID_ARGUMENT,
        "Invalid access token",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskhub_core::{AuthError, TokenError};

    #[test]
    fn test_status_parts() {
        assert_eq!(
            status_parts(ErrorStatus::AlreadyExists),
            (StatusCode::CONFLICT, error_codes::ALREADY_EXISTS)
        );
        assert_eq!(
            status_parts(ErrorStatus::Unauthenticated).0,
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_domain_error_statuses() {
        let cases = [
            (DomainError::from(TokenError::SessionBlocked), StatusCode::UNAUTHORIZED),
            (DomainError::from(AuthError::UserAlreadyExists), StatusCode::CONFLICT),
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("Session"), StatusCode::NOT_FOUND),
            (DomainError::internal("redis down"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(handle_domain_error(&error).status(), expected);
        }
    }
}
