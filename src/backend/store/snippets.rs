/**
 * Snippet Database Operations
 *
 * Reads only ever see snippets whose `expires` is still in the future;
 * expired rows stay in the table but are invisible.
 */

use chrono::{Duration, Utc};
use sqlx::PgPool;

use crate::backend::store::StoreError;
use crate::shared::Snippet;

/// Maximum number of snippets on the home page
pub const LATEST_LIMIT: i64 = 10;

/// Get a non-expired snippet by id
///
/// # Returns
/// The snippet, or `None` if it does not exist or has expired
pub async fn get_snippet(pool: &PgPool, id: i64) -> Result<Option<Snippet>, StoreError> {
    let snippet = sqlx::query_as::<_, Snippet>(
        r#"
        SELECT id, title, content, created, expires
        FROM snippets
        WHERE expires > NOW() AND id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(snippet)
}

/// Get the most recently created non-expired snippets
///
/// # Returns
/// At most [`LATEST_LIMIT`] snippets, newest first
pub async fn latest_snippets(pool: &PgPool) -> Result<Vec<Snippet>, StoreError> {
    let snippets = sqlx::query_as::<_, Snippet>(
        r#"
        SELECT id, title, content, created, expires
        FROM snippets
        WHERE expires > NOW()
        ORDER BY created DESC, id DESC
        LIMIT $1
        "#
    )
    .bind(LATEST_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(snippets)
}

/// Insert a snippet that expires `lifetime` after now
///
/// # Returns
/// The new snippet's id
pub async fn insert_snippet(
    pool: &PgPool,
    title: &str,
    content: &str,
    lifetime: Duration,
) -> Result<i64, StoreError> {
    let created = Utc::now();
    let expires = created + lifetime;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO snippets (title, content, created, expires)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#
    )
    .bind(title)
    .bind(content)
    .bind(created)
    .bind(expires)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Inserted snippet {} (expires {})", id, expires);

    Ok(id)
}
