//! Snippets Module
//!
//! HTTP handlers for listing, showing and creating snippets. The queries
//! themselves live in `backend::store::snippets`.

/// Snippet page handlers
pub mod handlers;

pub use handlers::{create_snippet, home, new_snippet_form, show_snippet};
