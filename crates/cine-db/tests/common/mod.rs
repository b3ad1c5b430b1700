#![allow(dead_code)]

use cine_core::{Favorite, User};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A user fixture with a throwaway hash; repository tests never verify
/// passwords.
pub fn test_user(email: &str) -> User {
    User::new(email, "$argon2id$stub-hash".to_string(), None)
}

pub fn test_favorite(user_id: Uuid, title: &str) -> Favorite {
    Favorite::new(
        user_id,
        title.to_string(),
        Some("A test movie".to_string()),
        None,
        Some("2024-01-01".to_string()),
        Some(42),
    )
}
