//! Middleware Module
//!
//! Request processing that runs around the handlers. From the outside in:
//!
//! - **`logging`** - one log line per request
//! - security headers (plain `tower-http` layers, see `routes::router`)
//! - **`csrf`** - token issuance and verification
//! - **`auth`** - login gate for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn, routing::get, Router};
//! use snippetbox::backend::middleware::require_login;
//!
//! let protected: Router = Router::new()
//!     .route("/snippet/new", get(|| async { "form" }))
//!     .route_layer(from_fn(require_login));
//! ```

pub mod auth;
pub mod csrf;
pub mod logging;

pub use auth::require_login;
pub use csrf::csrf_protect;
pub use logging::log_request;
