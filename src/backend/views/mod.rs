//! Views Module
//!
//! Server-side HTML rendering with Tera.
//!
//! - **`data`** - the `HtmlData` envelope every page receives
//! - **`render`** - template loading and the `render_page` helper

/// Template data envelope
pub mod data;

/// Template loading and rendering
pub mod render;

pub use data::{FormValues, FormView, HtmlData};
pub use render::Templates;
