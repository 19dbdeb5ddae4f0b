//! Backend Module
//!
//! This module contains all server-side code for snippetbox: an Axum HTTP
//! server rendering HTML pages from PostgreSQL data.
//!
//! # Architecture
//!
//! - **`server`** - Database setup, application state, app creation
//! - **`routes`** - Router assembly and layer order
//! - **`snippets`** - Snippet page handlers
//! - **`auth`** - Sessions, signup, login, logout
//! - **`store`** - SQL for snippets and users
//! - **`middleware`** - Request logging, CSRF, login gate
//! - **`views`** - Tera rendering and the page data envelope
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── snippets/       - Snippet handlers
//! ├── auth/           - Sessions and user handlers
//! ├── store/          - Database queries
//! ├── middleware/     - Request middleware
//! ├── views/          - Template rendering
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers receive an explicit `AppState` (database pool and templates)
//! through Axum's `State` extractor. Per-browser state lives in the session
//! and is reached through the `AppSession` extractor. There is no other
//! shared mutable state.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Validation and credential
//! problems never become errors; they are rendered back into the form with
//! a 200. Database, template and session failures become a logged 500 with
//! a generic body.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Snippet handlers
pub mod snippets;

/// Authentication and sessions
pub mod auth;

/// Database queries
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// HTML rendering
pub mod views;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState};
