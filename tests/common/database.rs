//! Database test fixtures
//!
//! Tests that need PostgreSQL call [`TestDatabase::connect`] and return early
//! when it gives `None`, so the suite still passes on machines without a
//! database. Run them with `DATABASE_URL` set; they are `#[serial]` because
//! every fixture truncates the shared tables.

use sqlx::PgPool;

/// A migrated, emptied database
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect using `DATABASE_URL`, or `None` when it is unset
    pub async fn connect() -> Option<Self> {
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping database test");
            return None;
        };

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create test database pool");

        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let db = Self { pool };
        db.cleanup().await.expect("Failed to clean test data");
        Some(db)
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Remove all rows and reset the id sequences
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        sqlx::query("TRUNCATE TABLE snippets, users RESTART IDENTITY")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Insert a snippet whose expiry is already in the past
    pub async fn insert_expired_snippet(&self, title: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO snippets (title, content, created, expires)
            VALUES ($1, 'gone', NOW() - INTERVAL '2 days', NOW() - INTERVAL '1 day')
            RETURNING id
            "#,
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await
    }
}
