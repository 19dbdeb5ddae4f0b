/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Connect the database pool and run migrations
 * 2. Create the Postgres session store, migrate it, and start the task that
 *    purges expired sessions
 * 3. Load the templates
 * 4. Build the router
 *
 * Any failure is returned as a [`StartupError`]; the server does not start
 * in a degraded mode.
 */

use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions_sqlx_store::PostgresStore;

use crate::backend::routes::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::backend::views::Templates;
use crate::shared::{ConfigError, ServerConfig};

/// How often expired sessions are deleted
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("template error: {0}")]
    Templates(#[from] tera::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing snippetbox server");

    let db_pool = load_database(config).await?;

    let session_store = PostgresStore::new(db_pool.clone());
    session_store.migrate().await?;

    let cleanup_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = cleanup_store
            .continuously_delete_expired(SESSION_CLEANUP_INTERVAL)
            .await
        {
            tracing::error!("Session cleanup task stopped: {}", e);
        }
    });

    let templates = Templates::load(&config.html_dir)?;

    let app = create_router(AppState::new(db_pool, templates), session_store, config);
    tracing::info!("Router configured");

    Ok(app)
}

/// Resolves on Ctrl-C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
