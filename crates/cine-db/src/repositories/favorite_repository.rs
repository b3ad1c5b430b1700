//! Favorite repository - per-user saved movies.
//!
//! Every query is scoped by `user_id`; one user's rows are invisible to
//! another's list or delete.

use crate::{DbError, Result as DbErrorResult};

use cine_core::Favorite;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

pub struct FavoriteRepository {
    pool: SqlitePool,
}

impl FavoriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, favorite: &Favorite) -> DbErrorResult<()> {
        let id = favorite.id.to_string();
        let user_id = favorite.user_id.to_string();
        let created_at = favorite.created_at.timestamp();
        let updated_at = favorite.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO favorites (
                    id, user_id, title, description, poster, release_date, tmdb_id,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&favorite.title)
        .bind(&favorite.description)
        .bind(&favorite.poster)
        .bind(&favorite.release_date)
        .bind(favorite.tmdb_id)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// One page of a user's favorites, newest first.
    pub async fn list(&self, user_id: Uuid, limit: u32, offset: u32) -> DbErrorResult<Vec<Favorite>> {
        let user_id = user_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, user_id, title, description, poster, release_date, tmdb_id,
                    created_at, updated_at
                FROM favorites
                WHERE user_id = ?
                ORDER BY created_at DESC, id
                LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_favorite).collect()
    }

    pub async fn count(&self, user_id: Uuid) -> DbErrorResult<i64> {
        let user_id = user_id.to_string();

        let row = sqlx::query("SELECT COUNT(*) AS total FROM favorites WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("total")?)
    }

    /// Delete a favorite owned by `user_id`. Returns false when no such row
    /// exists for that user - the caller maps this to 404.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<bool> {
        let user_id = user_id.to_string();
        let id = id.to_string();

        let result = sqlx::query("DELETE FROM favorites WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[track_caller]
fn map_favorite(row: SqliteRow) -> DbErrorResult<Favorite> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Favorite {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in favorites.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        user_id: Uuid::parse_str(&user_id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in favorites.user_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        poster: row.try_get("poster")?,
        release_date: row.try_get("release_date")?,
        tmdb_id: row.try_get("tmdb_id")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in favorites.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in favorites.updated_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
