//! Favorites REST API handlers
//!
//! All routes here sit behind the auth gate; every query is scoped to the
//! caller resolved from the bearer token.

use crate::{
    ApiError, ApiResult, AppState, AuthUser, CreateFavoriteRequest, DeleteResponse, FavoriteDto,
    FavoriteListResponse, ListFavoritesQuery,
};

use cine_core::Favorite;
use cine_db::FavoriteRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 50;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/favorites?page&limit
pub async fn list_favorites(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<ListFavoritesQuery>,
) -> ApiResult<Json<FavoriteListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = (page - 1).saturating_mul(limit);

    let repo = FavoriteRepository::new(state.pool.clone());
    let total = repo.count(user_id).await?;
    let items = repo.list(user_id, limit, offset).await?;

    let total_pages = (total as u64).div_ceil(limit as u64) as u32;

    Ok(Json(FavoriteListResponse {
        items: items.into_iter().map(FavoriteDto::from).collect(),
        page,
        total_pages,
        total,
    }))
}

/// POST /api/favorites
pub async fn create_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateFavoriteRequest>,
) -> ApiResult<(StatusCode, Json<FavoriteDto>)> {
    let title = payload
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("title is required"))?;

    let favorite = Favorite::new(
        user_id,
        title,
        payload.description,
        payload.poster,
        payload.release_date,
        payload.tmdb_id,
    );

    let repo = FavoriteRepository::new(state.pool.clone());
    repo.create(&favorite).await?;

    Ok((StatusCode::CREATED, Json(FavoriteDto::from(favorite))))
}

/// DELETE /api/favorites/:id
pub async fn delete_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let favorite_id = Uuid::parse_str(&id).map_err(|e| ApiError::InvalidId {
        message: format!("Invalid favorite id: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let repo = FavoriteRepository::new(state.pool.clone());
    let deleted = repo.delete(user_id, favorite_id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: format!("Favorite {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(DeleteResponse { ok: true }))
}
