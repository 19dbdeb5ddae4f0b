/**
 * User Database Operations
 *
 * Passwords are hashed with bcrypt before they reach the database. Credential
 * checks return the same `InvalidCredentials` error whether the email is
 * unknown or the password is wrong, and both paths run one bcrypt verify.
 */

use std::sync::LazyLock;

use bcrypt::{hash, verify};
use chrono::Utc;
use sqlx::PgPool;

use crate::backend::store::StoreError;
use crate::shared::User;

/// bcrypt work factor for new password hashes
pub const BCRYPT_COST: u32 = 12;

/// Checked against when the email is unknown
static DUMMY_HASH: LazyLock<Result<String, bcrypt::BcryptError>> =
    LazyLock::new(|| hash("snippetbox-no-such-user", BCRYPT_COST));

/// Create a new user
///
/// # Returns
/// The new user's id, or `StoreError::DuplicateEmail` if the address is taken
pub async fn insert_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<i64, StoreError> {
    let password_hash = hash(password, BCRYPT_COST)?;

    let result = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO users (name, email, password_hash, created)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#
    )
    .bind(name)
    .bind(email)
    .bind(&password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await;

    match result {
        Ok(id) => Ok(id),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("Email already exists: {}", email);
            Err(StoreError::DuplicateEmail)
        }
        Err(e) => Err(e.into()),
    }
}

/// Check an email and password pair
///
/// # Returns
/// The user's id when the password matches, `StoreError::InvalidCredentials`
/// otherwise
pub async fn verify_user(pool: &PgPool, email: &str, password: &str) -> Result<i64, StoreError> {
    let row = sqlx::query_as::<_, (i64, String)>(
        r#"
        SELECT id, password_hash
        FROM users
        WHERE email = $1
        "#
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    let Some((id, password_hash)) = row else {
        if let Ok(dummy) = DUMMY_HASH.as_ref() {
            let _ = verify(password, dummy);
        }
        tracing::warn!("Login attempt for unknown email");
        return Err(StoreError::InvalidCredentials);
    };

    if !verify(password, &password_hash)? {
        tracing::warn!("Invalid password for user {}", id);
        return Err(StoreError::InvalidCredentials);
    }

    Ok(id)
}

/// Fetch a user by id
pub async fn get_user(pool: &PgPool, id: i64) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created
        FROM users
        WHERE id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
