//! Status-code and body-shape mapping tests for ApiError

use crate::ApiError;

use cine_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn response_parts(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_validation_error_then_400_invalid_payload() {
    let (status, body) = response_parts(ApiError::validation("title is required")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_payload");
    assert_eq!(body["message"], "title is required");
}

#[tokio::test]
async fn given_unauthorized_then_body_is_exactly_the_fixed_shape() {
    let (status, body) = response_parts(ApiError::unauthorized()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, serde_json::json!({ "error": "unauthorized" }));
}

#[tokio::test]
async fn given_invalid_credentials_then_401_with_code_only() {
    let (status, body) = response_parts(ApiError::invalid_credentials()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, serde_json::json!({ "error": "invalid_credentials" }));
}

#[tokio::test]
async fn given_catalog_key_missing_then_503_tmdb_key_missing() {
    let (status, body) = response_parts(ApiError::catalog_key_missing()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "tmdb_key_missing");
}

#[tokio::test]
async fn given_duplicate_email_db_error_then_409_email_exists() {
    let db_error = DbError::DuplicateEmail {
        email: "a@x.com".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, body) = response_parts(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "email_exists");
}

#[tokio::test]
async fn given_unavailable_db_error_then_503_db_unavailable() {
    let db_error = DbError::Unavailable {
        message: "pool timed out".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, body) = response_parts(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "db_unavailable");
}

#[tokio::test]
async fn given_decode_db_error_then_500_db_error_without_detail() {
    let db_error = DbError::Decode {
        message: "bad uuid in users.id".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, body) = response_parts(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "db_error");
    // Internal detail is logged, not sent to the client
    assert_eq!(body["message"], "database operation failed");
}
