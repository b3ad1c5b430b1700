use cine_auth::TokenService;
use cine_catalog::CatalogClient;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for REST handlers.
///
/// Everything here is read-only after startup; per-request state never
/// lives in `AppState`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_service: Arc<TokenService>,
    /// Present only when a catalog API key is configured. Checked at each
    /// use site; absence is a 503 on the films route, not a startup failure.
    pub catalog: Option<Arc<CatalogClient>>,
}
