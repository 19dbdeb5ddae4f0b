//! Store Module
//!
//! Parameterized SQL against the `snippets` and `users` tables. There is no
//! caching; every call goes to PostgreSQL through the shared pool.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - StoreError and exports
//! ├── snippets.rs  - Snippet queries
//! └── users.rs     - User insert and credential check
//! ```

/// Snippet queries
pub mod snippets;

/// User queries and password verification
pub mod users;

use thiserror::Error;

/// Errors surfaced by the store
///
/// `DuplicateEmail` and `InvalidCredentials` are expected outcomes that the
/// handlers turn into form messages; the others are server failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Insert hit the unique constraint on `users.email`
    #[error("email address already in use")]
    DuplicateEmail,

    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("invalid user credentials")]
    InvalidCredentials,

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt failed to hash or parse a hash
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

pub use snippets::{get_snippet, insert_snippet, latest_snippets, LATEST_LIMIT};
pub use users::{get_user, insert_user, verify_user, BCRYPT_COST};
