//! Registered account record - email plus password hash.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered identity. Created only by the register flow; never mutated
/// or deleted by any route.
///
/// Deliberately not Serialize: `password_hash` must never appear in a
/// response body. API-facing views go through DTOs that omit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Stored normalized (trimmed, lowercased). Unique across all users.
    pub email: String,
    /// Argon2id PHC string, salt embedded.
    pub password_hash: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user. The email is normalized here; callers pass the
    /// raw client input.
    pub fn new(email: &str, password_hash: String, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            password_hash,
            display_name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Normalize an email for storage and comparison: trim whitespace, lowercase.
/// Exactly one user may exist per normalized email.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
