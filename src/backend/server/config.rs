/**
 * Database Setup
 *
 * Builds the PostgreSQL pool from `ServerConfig` and brings the schema up to
 * date. The database is required: any failure here aborts start-up.
 *
 * # Pool Sizing
 *
 * - `max_connections` bounds concurrent queries; extra requests wait for a
 *   free connection
 * - `min_connections` connections are kept open while idle
 */

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::backend::server::init::StartupError;
use crate::shared::ServerConfig;

/// Connect the pool and run pending migrations
pub async fn load_database(config: &ServerConfig) -> Result<PgPool, StartupError> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
