//! User repository - the credential store.
//!
//! Rows are written once by the register flow and read by login and the
//! auth extractor. Email uniqueness is the store's unique index; a losing
//! concurrent insert surfaces as `DbError::DuplicateEmail`.

use crate::{DbError, Result as DbErrorResult};

use cine_core::User;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, password_hash, display_name, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.display_name)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e
                && db.is_unique_violation()
            {
                return DbError::DuplicateEmail {
                    email: user.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                };
            }
            DbError::from(e)
        })?;

        Ok(())
    }

    /// Exact match on the normalized email. Callers normalize before lookup.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, display_name, created_at, updated_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_user).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, display_name, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_user).transpose()
    }
}

#[track_caller]
fn map_user(row: SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        display_name: row.try_get("display_name")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in users.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| DbError::Decode {
            message: "Invalid timestamp in users.updated_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
