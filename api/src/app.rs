//! Application factory
//!
//! Builds the Actix-web application around an already wired `AppState`.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use crate::handlers::error::json_error_handler;
use crate::routes::auth::{
    login::login, logout::logout, renew::renew, signup::signup, validate::validate, AppState,
};

use taskhub_core::repositories::{RevocationStore, SessionRepository, UserRepository};
use taskhub_shared::{error_codes, ErrorResponse};

/// Create and configure the application with all dependencies
pub fn create_app<U, S, V>(
    app_state: web::Data<AppState<U, S, V>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            tracing_actix_web::StreamSpan<actix_web::body::BoxBody>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    V: RevocationStore + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Access log with a request span around every handler
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::<U, S, V>))
                        .route("/login", web::post().to(login::<U, S, V>))
                        .route("/validate", web::post().to(validate::<U, S, V>))
                        .route("/renew", web::post().to(renew::<U, S, V>))
                        .route("/logout", web::post().to(logout::<U, S, V>)),
                )
                .route("/", web::get().to(api_documentation)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "taskhub-auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "TaskHub Auth API v1",
        "endpoints": {
            "health": "/health",
            "auth": {
                "signup": {
                    "path": "/api/v1/auth/signup",
                    "method": "POST",
                    "request_body": { "name": "string", "email": "string", "password": "string" }
                },
                "login": {
                    "path": "/api/v1/auth/login",
                    "method": "POST",
                    "request_body": { "email": "string", "password": "string" }
                },
                "validate": {
                    "path": "/api/v1/auth/validate",
                    "method": "POST",
                    "requires_auth": true
                },
                "renew": {
                    "path": "/api/v1/auth/renew",
                    "method": "POST",
                    "request_body": { "refresh_token": "string" }
                },
                "logout": {
                    "path": "/api/v1/auth/logout",
                    "method": "POST",
                    "requires_auth": true,
                    "request_body": { "refresh_token": "string" }
                }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
