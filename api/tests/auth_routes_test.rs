//! Integration tests for the auth endpoints

use std::sync::Arc;

use actix_web::{http::header, http::StatusCode, test, web};
use serde_json::{json, Value};

use taskhub_api::app::create_app;
use taskhub_api::routes::auth::AppState;
use taskhub_core::repositories::{
    MockRevocationStore, MockSessionRepository, MockUserRepository, SessionRepository,
};
use taskhub_core::services::{
    AuthService, AuthServiceConfig, SessionService, TokenService, TokenServiceConfig,
};

type TestState = AppState<MockUserRepository, MockSessionRepository, MockRevocationStore>;

struct Harness {
    sessions: MockSessionRepository,
    revocations: MockRevocationStore,
    state: web::Data<TestState>,
}

fn harness() -> Harness {
    let sessions = MockSessionRepository::new();
    let revocations = MockRevocationStore::new();
    let token_service = Arc::new(TokenService::new(
        revocations.clone(),
        TokenServiceConfig {
            jwt_secret: "api-test-secret".to_string(),
            ..Default::default()
        },
    ));
    let session_service = Arc::new(SessionService::new(sessions.clone(), token_service.clone()));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(MockUserRepository::new()),
        session_service,
        token_service,
        AuthServiceConfig {
            bcrypt_cost: 4,
            min_password_length: 8,
        },
    ));

    Harness {
        sessions,
        revocations,
        state: web::Data::new(AppState::new(auth_service)),
    }
}

fn harry_signup() -> Value {
    json!({
        "name": "Harry Potter",
        "email": "harry@hogwarts.edu",
        "password": "password"
    })
}

fn harry_login() -> Value {
    json!({ "email": "harry@hogwarts.edu", "password": "password" })
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_health_check() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "taskhub-auth");
}

#[actix_web::test]
async fn test_signup_then_duplicate_conflicts() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(harry_signup())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "harry@hogwarts.edu");
    assert_eq!(body["role"], "user");
    assert!(body.get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(harry_signup())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ALREADY_EXISTS");
    assert_eq!(body["message"], "User already exists");
}

#[actix_web::test]
async fn test_signup_rejects_invalid_body() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({ "name": "Harry", "email": "not-an-email", "password": "password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_ARGUMENT");
    assert!(body["details"].get("email").is_some());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_signup_short_password() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({ "name": "Harry", "email": "harry@hogwarts.edu", "password": "short" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_validate_renew_logout_flow() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(harry_signup())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // login
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(harry_login())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let login: Value = test::read_body_json(resp).await;
    let access = login["access_token"].as_str().unwrap().to_string();
    let refresh = login["refresh_token"].as_str().unwrap().to_string();
    assert_eq!(login["user"]["email"], "harry@hogwarts.edu");

    let session_id = login["session_id"].as_str().unwrap().parse().unwrap();
    let session = h.sessions.get_session_by_id(session_id).await.unwrap().unwrap();
    assert!(!session.is_blocked);
    assert_eq!(session.email, "harry@hogwarts.edu");

    // validate
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/validate")
        .insert_header(bearer(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: Value = test::read_body_json(resp).await;
    assert_eq!(user["email"], "harry@hogwarts.edu");
    assert_eq!(user["role"], "user");

    // renew
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/renew")
        .set_json(json!({ "refresh_token": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let renewed: Value = test::read_body_json(resp).await;
    assert!(renewed["access_token"].as_str().is_some());

    // logout twice
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/logout")
            .insert_header(bearer(&access))
            .set_json(json!({ "refresh_token": refresh }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let session = h.sessions.get_session_by_id(session_id).await.unwrap().unwrap();
    assert!(session.is_blocked);
    assert!(h.revocations.ttl(&access).await.is_some());

    // revoked access token
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/validate")
        .insert_header(bearer(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid or expired token");

    // blocked session
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/renew")
        .set_json(json!({ "refresh_token": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Session blocked");
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(harry_signup())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "harry@hogwarts.edu", "password": "wrong-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_web::test]
async fn test_login_unknown_email() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "ron@hogwarts.edu", "password": "password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_web::test]
async fn test_renew_rejects_access_token() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(harry_signup())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(harry_login())
        .to_request();
    let login: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/renew")
        .set_json(json!({ "refresh_token": login["access_token"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "invalid token type");
}

#[actix_web::test]
async fn test_validate_requires_bearer_header() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post().uri("/api/v1/auth/validate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/validate")
        .insert_header(bearer("garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_validate_fails_closed_when_revocation_store_down() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(harry_signup())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(harry_login())
        .to_request();
    let login: Value = test::call_and_read_body_json(&app, req).await;
    let access = login["access_token"].as_str().unwrap().to_string();

    h.revocations.set_failing(true);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/validate")
        .insert_header(bearer(&access))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_fails_when_session_store_down() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(harry_signup())
        .to_request();
    test::call_service(&app, req).await;

    h.sessions.set_failing(true);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(harry_login())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "Internal server error");
}

#[actix_web::test]
async fn test_unknown_route() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_logout_without_access_token_is_bad_request() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .set_json(json!({ "refresh_token": "eyJ.refresh" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_ARGUMENT");
    assert_eq!(body["message"], "Invalid access token");
}

#[actix_web::test]
async fn test_logout_with_revocation_store_down_is_retryable() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(harry_signup())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(harry_login())
        .to_request();
    let login: Value = test::call_and_read_body_json(&app, req).await;
    let access = login["access_token"].as_str().unwrap().to_string();
    let refresh = login["refresh_token"].as_str().unwrap().to_string();

    h.revocations.set_failing(true);
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(bearer(&access))
        .set_json(json!({ "refresh_token": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    h.revocations.set_failing(false);
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/logout")
        .insert_header(bearer(&access))
        .set_json(json!({ "refresh_token": refresh }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
