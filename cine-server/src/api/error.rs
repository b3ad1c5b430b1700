//! REST API error types
//!
//! Every core operation returns a typed outcome; this module maps them to
//! the wire contract. Bodies are the flat `{"error": code}` shape with an
//! optional human-readable `message`.

use cine_auth::AuthError;
use cine_catalog::CatalogError;
use cine_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code (e.g., "invalid_payload", "unauthorized")
    pub error: String,
    /// Human-readable detail, omitted where the contract fixes the body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-supplied data fails validation (400 invalid_payload)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed path id (400 invalid_id)
    #[error("Invalid id: {message} {location}")]
    InvalidId {
        message: String,
        location: ErrorLocation,
    },

    /// Missing/malformed/expired/bad-signature bearer token (401).
    /// Carries no detail: the failure modes are deliberately
    /// indistinguishable to the client.
    #[error("Unauthorized {location}")]
    Unauthorized { location: ErrorLocation },

    /// Wrong password or unknown email, identical either way (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Resource not found (404 not_found)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Email already registered (409 email_exists)
    #[error("Email already registered {location}")]
    EmailExists { location: ErrorLocation },

    /// Hashing or token signing failed (500 auth_error)
    #[error("Auth failure: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    /// Unexpected database failure (500 db_error)
    #[error("Database failure: {message} {location}")]
    Database {
        message: String,
        location: ErrorLocation,
    },

    /// Upstream catalog call failed (502 external_api_error)
    #[error("Upstream catalog error: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// Store unreachable (503 db_unavailable)
    #[error("Database unavailable {location}")]
    DbUnavailable { location: ErrorLocation },

    /// No catalog API key configured (503 tmdb_key_missing)
    #[error("Catalog API key missing {location}")]
    CatalogKeyMissing { location: ErrorLocation },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn catalog_key_missing() -> Self {
        ApiError::CatalogKeyMissing {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with location for debugging; 4xx outcomes are routine
        match &self {
            ApiError::Auth { .. }
            | ApiError::Database { .. }
            | ApiError::Upstream { .. }
            | ApiError::DbUnavailable { .. }
            | ApiError::CatalogKeyMissing { .. } => log::error!("{}", self),
            _ => log::debug!("{}", self),
        }

        let (status, code, message) = match self {
            ApiError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, "invalid_payload", Some(message))
            }
            ApiError::InvalidId { message, .. } => {
                (StatusCode::BAD_REQUEST, "invalid_id", Some(message))
            }
            // The contract fixes this body to exactly {"error":"unauthorized"}
            ApiError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            ApiError::InvalidCredentials { .. } => {
                (StatusCode::UNAUTHORIZED, "invalid_credentials", None)
            }
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "not_found", Some(message))
            }
            ApiError::EmailExists { .. } => (
                StatusCode::CONFLICT,
                "email_exists",
                Some("email already registered".to_string()),
            ),
            ApiError::Auth { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "auth_error",
                Some("authentication processing failed".to_string()),
            ),
            ApiError::Database { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "db_error",
                Some("database operation failed".to_string()),
            ),
            ApiError::Upstream { .. } => (
                StatusCode::BAD_GATEWAY,
                "external_api_error",
                Some("upstream catalog request failed".to_string()),
            ),
            ApiError::DbUnavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "db_unavailable",
                Some("database is not available".to_string()),
            ),
            ApiError::CatalogKeyMissing { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "tmdb_key_missing",
                Some("catalog API key is not configured".to_string()),
            ),
        };

        let body = ApiErrorResponse {
            error: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateEmail { .. } => ApiError::EmailExists {
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Unavailable { .. } => {
                log::error!("Database unavailable: {}", e);
                ApiError::DbUnavailable {
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            // Don't expose internal database details to clients
            _ => {
                log::error!("Database error: {}", e);
                ApiError::Database {
                    message: "database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert auth-plumbing failures (hashing, token signing) to API errors.
/// Token *verification* failures never come through here - the auth
/// extractor collapses those to `Unauthorized` itself.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::error!("Auth failure: {}", e);
        ApiError::Auth {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert upstream catalog errors to API errors
impl From<CatalogError> for ApiError {
    #[track_caller]
    fn from(e: CatalogError) -> Self {
        log::error!("Catalog error: {}", e);
        ApiError::Upstream {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
