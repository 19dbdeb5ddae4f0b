//! Server Module
//!
//! Everything needed to turn a `ServerConfig` into a running router.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool and migrations
//! └── init.rs         - App creation, startup errors, shutdown signal
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Database**: pool sized from the config, migrations applied
//! 2. **Sessions**: Postgres-backed session store with periodic cleanup
//! 3. **Templates**: parsed once from the template directory
//! 4. **Router**: routes, middleware and state assembled

/// Application state management
pub mod state;

/// Database pool setup
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, shutdown_signal, StartupError};
pub use state::AppState;
