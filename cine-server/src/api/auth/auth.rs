//! Register and login handlers.
//!
//! The only writers of the credential store. Both mint a token on success;
//! password plaintext never outlives the request and is never logged.

use crate::{ApiError, ApiResult, AppState, LoginRequest, RegisterRequest, TokenResponse};

use cine_auth::password;
use cine_core::{User, normalize_email};
use cine_db::UserRepository;

use axum::{Json, extract::State, http::StatusCode};

/// Minimum accepted password length, in characters.
const MIN_PASSWORD_CHARS: usize = 6;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let email = normalize_email(payload.email.as_deref().unwrap_or_default());
    let password = payload.password.unwrap_or_default();

    if email.is_empty() {
        return Err(ApiError::validation("email is required"));
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ApiError::validation(
            "password must be at least 6 characters",
        ));
    }

    let password_hash = password::hash(&password)?;
    let display_name = payload
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    let user = User::new(&email, password_hash, display_name);

    // The unique index decides concurrent registrations; a lost race
    // surfaces here as 409 like any other duplicate.
    let repo = UserRepository::new(state.pool.clone());
    repo.create(&user).await?;

    log::info!("Registered user {}", user.id);

    let token = state.token_service.issue(&user.id.to_string())?;

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let email = normalize_email(payload.email.as_deref().unwrap_or_default());
    let password = payload.password.unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation("email and password are required"));
    }

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.find_by_email(&email).await?;

    // Unknown email and wrong password produce identical responses; login
    // must not be an account-existence oracle.
    let Some(user) = user else {
        return Err(ApiError::invalid_credentials());
    };

    if !password::verify(&password, &user.password_hash) {
        return Err(ApiError::invalid_credentials());
    }

    let token = state.token_service.issue(&user.id.to_string())?;

    Ok(Json(TokenResponse { token }))
}
