//! Axum extractor implementing the request authorization gate.

use crate::{ApiError, AppState};

use cine_auth::bearer_token;

use std::future::Future;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use uuid::Uuid;

/// The authenticated caller, resolved from the bearer token.
///
/// Runs before any handler body. Missing header, wrong scheme, empty token,
/// and every verification failure (malformed, bad signature, expired) all
/// produce the same `Unauthorized` rejection - the gate does not tell the
/// client why a token failed. The token service is never called with an
/// empty string. No database access happens here.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok());

            let Some(token) = bearer_token(header) else {
                return Err(ApiError::unauthorized());
            };

            let claims = state.token_service.verify(token).map_err(|e| {
                // The reason is logged server-side only
                log::debug!("Token verification failed: {}", e);
                ApiError::unauthorized()
            })?;

            let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::unauthorized())?;

            Ok(AuthUser(user_id))
        }
    }
}
