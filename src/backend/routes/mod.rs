//! Route Configuration Module
//!
//! # Route Organization
//!
//! - **Public pages** - home, snippet view, signup, login
//! - **Protected pages** - snippet form and logout, behind the login gate
//! - **Static files** - `/static/*` served from the configured directory
//! - **Fallback** - 404 for everything else
//!
//! # Example
//!
//! ```rust,no_run
//! use snippetbox::backend::routes::create_router;
//! use snippetbox::backend::server::AppState;
//! use snippetbox::shared::ServerConfig;
//! use tower_sessions::MemoryStore;
//!
//! # fn example(state: AppState) {
//! let config = ServerConfig::default();
//! let router = create_router(state, MemoryStore::default(), &config);
//! # }
//! ```

/// Main router creation
pub mod router;

pub use router::create_router;
