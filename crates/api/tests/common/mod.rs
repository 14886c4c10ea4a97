//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` (via
//! [`build_app_router`]) so integration tests exercise the same middleware
//! stack (CORS, request ID, timeout, tracing, panic recovery) that
//! production uses.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use webblog_api::auth::jwt::JwtConfig;
use webblog_api::auth::password::hash_password;
use webblog_api::config::{AuthorConfig, ServerConfig, StorageConfig};
use webblog_api::router::build_app_router;
use webblog_api::state::AppState;
use webblog_db::models::user::User;
use webblog_db::repositories::UserRepo;
use webblog_storage::LocalStore;

/// Plaintext password used for the seeded author account.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            expiry_mins: 60,
        },
        author: AuthorConfig {
            username: "keyko".to_string(),
            mail: "keyko@test.com".to_string(),
            password_hash: None,
            password: Some(TEST_PASSWORD.to_string()),
        },
        storage: StorageConfig::Local {
            base_dir: "storage/uploads".to_string(),
            public_base: "/uploads".to_string(),
        },
    }
}

/// Fresh per-test directory for the local object store.
pub fn test_uploads_dir() -> PathBuf {
    std::env::temp_dir().join(format!("webblog-test-uploads-{}", uuid::Uuid::new_v4()))
}

/// Build the full application router against the given pool, backed by a
/// local object store rooted at `uploads_dir`.
pub fn build_test_app_with_uploads(pool: PgPool, uploads_dir: PathBuf) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store: Arc::new(LocalStore::new(uploads_dir, "/uploads")),
    };
    build_app_router(state, &config)
}

/// Build the full application router with a throwaway uploads directory.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_uploads(pool, test_uploads_dir())
}

/// Seed the author account directly in the database.
pub async fn seed_author(pool: &PgPool) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::ensure_author(pool, "keyko", "keyko@test.com", &hashed)
        .await
        .expect("author provisioning should succeed")
}

/// Issue a request and return the raw response.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    request(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::POST, uri, None, None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    request(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    request(app, Method::PATCH, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Log the seeded author in via the API and return the bearer token.
pub async fn login_author(app: Router) -> String {
    let body = serde_json::json!({ "login": "keyko", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("login must return access_token")
        .to_string()
}

/// Create an article via the API, returning the response JSON.
pub async fn create_article(
    app: Router,
    token: &str,
    title: &str,
    tags: &[&str],
) -> serde_json::Value {
    let body = serde_json::json!({
        "title": title,
        "content": format!("Body of {title}"),
        "tags": tags,
    });
    let response = post_json_auth(app, "/api/articles", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
