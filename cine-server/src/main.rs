pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    favorites::{
        create_favorite_request::CreateFavoriteRequest,
        favorite_dto::FavoriteDto,
        favorite_list_response::FavoriteListResponse,
        favorites::{create_favorite, delete_favorite, list_favorites},
        list_favorites_query::ListFavoritesQuery,
    },
    films::{
        film_dto::FilmDto,
        film_list_response::FilmListResponse,
        films::list_films,
        list_films_query::ListFilmsQuery,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;

use cine_auth::TokenService;
use cine_catalog::CatalogClient;

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration. Validation refuses to start without
    // an explicit signing secret - there is no development fallback.
    let config = cine_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = cine_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cine-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/cine-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Token service over the configured shared secret
    let Some(ref jwt_secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set")
    };
    let token_service = Arc::new(TokenService::with_hs256(jwt_secret.as_bytes()));
    info!("Token service initialized (HS256, 7-day expiry)");

    // Catalog client only when a key is configured; the films route answers
    // 503 while it is absent
    let catalog: Option<Arc<CatalogClient>> = match config.catalog.api_key {
        Some(ref api_key) => {
            info!("Catalog client ready: {}", config.catalog.base_url);
            Some(Arc::new(CatalogClient::new(
                &config.catalog.base_url,
                api_key,
                &config.catalog.language,
            )))
        }
        None => {
            warn!("No catalog API key configured - /api/films will answer 503");
            None
        }
    };

    // Build application state
    let app_state = AppState {
        pool,
        token_service,
        catalog,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with ctrl-c shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
