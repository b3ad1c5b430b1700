use crate::health;
use crate::{AppState, create_favorite, delete_favorite, list_favorites, list_films, login, register};

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/api/health", get(health::health))
        // Auth endpoints (unauthenticated)
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        // Catalog proxy (bearer token)
        .route("/api/films", get(list_films))
        // Favorites (bearer token)
        .route("/api/favorites", get(list_favorites).post(create_favorite))
        .route("/api/favorites/{id}", delete(delete_favorite))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins; the API is bearer-token only)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
