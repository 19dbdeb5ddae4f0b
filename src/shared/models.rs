//! Domain Models
//!
//! Rows of the `snippets` and `users` tables as the rest of the crate sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short text post that stops being visible once `expires` has passed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Snippet {
    /// Database identifier (always >= 1)
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Creation time (UTC)
    pub created: DateTime<Utc>,
    /// Expiry time (UTC); reads filter on `expires > now`
    pub expires: DateTime<Utc>,
}

/// A registered account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique across all users
    pub email: String,
    /// bcrypt hash, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created: DateTime<Utc>,
}
