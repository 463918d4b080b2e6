//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - Signup and login
//! - Access token validation
//! - Access token renewal
//! - Logout

pub mod login;
pub mod logout;
pub mod renew;
pub mod signup;
pub mod validate;

use std::sync::Arc;

use actix_web::{http::header, HttpRequest};

use taskhub_core::repositories::{RevocationStore, SessionRepository, UserRepository};
use taskhub_core::services::AuthService;

/// Application state that holds shared services
pub struct AppState<U, S, V>
where
    U: UserRepository,
    S: SessionRepository,
    V: RevocationStore,
{
    pub auth_service: Arc<AuthService<U, S, V>>,
}

impl<U, S, V> AppState<U, S, V>
where
    U: UserRepository,
    S: SessionRepository,
    V: RevocationStore,
{
    pub fn new(auth_service: Arc<AuthService<U, S, V>>) -> Self {
        Self { auth_service }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        let basic = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert_eq!(bearer_token(&basic), None);

        let empty = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer "))
            .to_http_request();
        assert_eq!(bearer_token(&empty), None);

        assert_eq!(bearer_token(&TestRequest::default().to_http_request()), None);
    }
}
