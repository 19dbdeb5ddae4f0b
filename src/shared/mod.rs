//! Shared Module
//!
//! Types that carry no HTTP or database machinery: the domain models, the
//! submitted forms and their validation rules, and configuration.

/// Snippet and user models
pub mod models;

/// Form input and validation
pub mod forms;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use models::{Snippet, User};
pub use forms::{FieldErrors, LoginUser, NewSnippet, SignupUser, Validated};
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
