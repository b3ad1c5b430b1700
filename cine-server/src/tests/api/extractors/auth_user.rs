//! Auth gate unit tests - the extractor in isolation

use crate::{ApiError, AppState, AuthUser};

use cine_auth::TokenService;

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::Request;
use axum::http::request::Parts;
use uuid::Uuid;

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

async fn test_state() -> AppState {
    AppState {
        pool: sqlx::SqlitePool::connect(":memory:")
            .await
            .expect("Failed to create test pool"),
        token_service: Arc::new(TokenService::with_hs256(TEST_SECRET)),
        catalog: None,
    }
}

fn parts_with_auth(header: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/favorites");
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let (parts, _body) = builder.body(()).unwrap().into_parts();
    parts
}

#[tokio::test]
async fn given_valid_token_when_extracted_then_returns_user_id() {
    let state = test_state().await;
    let user_id = Uuid::new_v4();
    let token = state.token_service.issue(&user_id.to_string()).unwrap();
    let mut parts = parts_with_auth(Some(&format!("Bearer {}", token)));

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0, user_id);
}

#[tokio::test]
async fn given_missing_header_when_extracted_then_unauthorized() {
    let state = test_state().await;
    let mut parts = parts_with_auth(None);

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_non_bearer_scheme_when_extracted_then_unauthorized() {
    let state = test_state().await;
    let mut parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_empty_token_when_extracted_then_unauthorized() {
    let state = test_state().await;
    let mut parts = parts_with_auth(Some("Bearer "));

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_garbage_token_when_extracted_then_unauthorized() {
    let state = test_state().await;
    let mut parts = parts_with_auth(Some("Bearer not-a-jwt"));

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_non_uuid_subject_when_extracted_then_unauthorized() {
    let state = test_state().await;
    let token = state.token_service.issue("not-a-uuid").unwrap();
    let mut parts = parts_with_auth(Some(&format!("Bearer {}", token)));

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
