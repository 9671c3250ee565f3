//! Shared helpers for HTTP-level integration tests.

#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use skillreel_api::auth::jwt::{issue_access_token, JwtConfig};
use skillreel_api::auth::password::hash_password;
use skillreel_api::config::{ScoringConfig, ServerConfig};
use skillreel_api::router::build_app_router;
use skillreel_api::state::AppState;
use skillreel_db::models::user::{CreateUser, User};
use skillreel_db::repositories::{RoleRepo, UserRepo};
use skillreel_storage::{StorageClient, StorageConfig};

/// Fixed JWT secret shared by the test app and [`token_for`].
const TEST_JWT_SECRET: &str = "integration-test-secret-not-for-production";

/// Password used for every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "sufficiently-long-pw";

/// Build a test `JwtConfig` with a fixed secret.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 60,
    }
}

/// Build a test `ScoringConfig` whose jobs are due immediately.
///
/// Tests drive the engine synchronously via `run_due_jobs`, so the
/// submission delay is zero and the polling knobs are irrelevant.
pub fn test_scoring_config() -> ScoringConfig {
    ScoringConfig {
        delay_secs: 0.0,
        poll_interval_secs: 1,
        visibility_timeout_secs: 30.0,
        max_attempts: 5,
        retry_backoff_secs: 5.0,
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: test_jwt_config(),
        scoring: test_scoring_config(),
    }
}

/// Build a test `StorageConfig` with static credentials.
///
/// Presigning is a local computation, so no bucket has to exist and no
/// request ever reaches S3.
pub fn test_storage_config() -> StorageConfig {
    StorageConfig {
        bucket: "skillreel-videos-test".to_string(),
        region: "us-east-1".to_string(),
        endpoint: None,
        access_key_id: "test-access-key".to_string(),
        secret_access_key: "test-secret-key".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub async fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let storage = StorageClient::new(&test_storage_config()).await;

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(storage),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user with the given role directly in the database, bypassing
/// the registration endpoint. The password is always [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, email: &str, role_name: &str) -> User {
    let role = RoleRepo::find_by_name(pool, role_name)
        .await
        .expect("role query should succeed")
        .expect("role should be seeded");
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role_id: role.id,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Issue an access token for a user without going through `/auth/login`.
///
/// Signed with the same secret as the test app, so every authenticated
/// endpoint accepts it. Authorization still resolves the user's
/// permissions from the database per request.
pub fn token_for(user: &User, role_name: &str) -> String {
    issue_access_token(user.id, role_name, &test_jwt_config())
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request with no Authorization header.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Issue a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Issue a POST request with a JSON body and no Authorization header.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Issue a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Issue a PUT request with a JSON body and a bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should succeed")
}

/// Read and parse a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
