//! Catalog proxy handler.
//!
//! A thin pass-through to the upstream catalog: one outbound call per
//! request, no caching, no retries.

use crate::{ApiError, ApiResult, AppState, AuthUser, FilmDto, FilmListResponse, ListFilmsQuery};

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /api/films?q&page
pub async fn list_films(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(query): Query<ListFilmsQuery>,
) -> ApiResult<Json<FilmListResponse>> {
    // Optional dependency, checked at use: no key, no catalog.
    let Some(catalog) = state.catalog.as_ref() else {
        return Err(ApiError::catalog_key_missing());
    };

    let page = query.page.unwrap_or(1).max(1);
    let result = catalog.search(query.q.as_deref(), page).await?;

    Ok(Json(FilmListResponse {
        items: result.results.iter().map(FilmDto::from).collect(),
        page: result.page,
        total_pages: result.total_pages,
        total: result.total_results,
    }))
}
