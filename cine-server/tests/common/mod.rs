#![allow(dead_code)]

//! Test infrastructure for cine-server API tests

use cine_auth::TokenService;
use cine_catalog::CatalogClient;
use cine_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite and migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/cine-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing (no catalog client)
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        token_service: Arc::new(TokenService::with_hs256(TEST_SECRET)),
        catalog: None,
    }
}

/// Create AppState with a catalog client pointed at a mock server
pub async fn create_test_app_state_with_catalog(catalog_url: &str) -> AppState {
    AppState {
        pool: create_test_pool().await,
        token_service: Arc::new(TokenService::with_hs256(TEST_SECRET)),
        catalog: Some(Arc::new(CatalogClient::new(catalog_url, "test-key", "en-US"))),
    }
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request with an optional bearer token
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).expect("Response body was not JSON")
}

/// Register a user through the API and return the issued token
pub async fn register_user(app: &Router, email: &str, password: &str) -> String {
    let request = json_request(
        "POST",
        "/api/auth/register",
        serde_json::json!({ "email": email, "password": password }),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    json["token"].as_str().expect("No token in response").to_string()
}
