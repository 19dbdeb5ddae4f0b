//! Snippetbox - Main Library
//!
//! Snippetbox is a small server-rendered web application for pasting and
//! sharing short text snippets that expire after a chosen period.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types with no HTTP dependency
//!   - Form validation (`NewSnippet`, `SignupUser`, `LoginUser`)
//!   - Domain models (`Snippet`, `User`)
//!   - Configuration
//!
//! - **`backend`** - The Axum HTTP server
//!   - Snippet and user stores (PostgreSQL via sqlx)
//!   - Cookie sessions, CSRF protection, login gate
//!   - Tera template rendering and static files
//!
//! # Usage
//!
//! ```rust,no_run
//! use snippetbox::backend::server::init::create_app;
//! use snippetbox::shared::config::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `StoreError` for database and credential failures
//! - `BackendError` for everything a handler can fail with; it converts
//!   straight into an HTTP response
//! - `ConfigError` for bad environment values

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
