/**
 * Snippetbox Server Entry Point
 *
 * Loads `.env`, sets up tracing, reads the configuration from the
 * environment and serves the application until Ctrl-C or SIGTERM.
 * With `TLS_CERT` and `TLS_KEY` set the server speaks HTTPS itself.
 */

use std::net::SocketAddr;
use std::time::Duration;

use axum_server::tls_rustls::RustlsConfig;
use snippetbox::backend::server::{create_app, shutdown_signal, StartupError};
use snippetbox::shared::ServerConfig;

/// How long in-flight HTTPS requests get to finish after a shutdown signal
const TLS_SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_env()?;
    let app = create_app(&config).await?;
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    match config.tls_paths() {
        Some((cert, key)) => {
            let tls = RustlsConfig::from_pem_file(cert, key).await?;

            let handle = axum_server::Handle::new();
            let shutdown = handle.clone();
            tokio::spawn(async move {
                shutdown_signal().await;
                shutdown.graceful_shutdown(Some(TLS_SHUTDOWN_GRACE));
            });

            tracing::info!("Starting HTTPS server on {}", config.addr);
            axum_server::bind_rustls(config.addr, tls)
                .handle(handle)
                .serve(service)
                .await?;
        }
        None => {
            let listener = tokio::net::TcpListener::bind(config.addr).await?;
            tracing::info!("Starting server on {}", config.addr);

            axum::serve(listener, service)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}
