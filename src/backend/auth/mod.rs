//! Authentication Module
//!
//! User signup, login and logout on top of cookie sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - SessionData, AppSession and the session layer
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email and password validated → user stored with a
//!    bcrypt hash → flash + redirect to the login page
//! 2. **Login**: credentials verified → session id rotated → user id stored
//!    in the session → redirect to the snippet form
//! 3. **Logout**: user id removed from the session → redirect home
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 12) before storage
//! - Invalid credentials never reveal whether the email exists
//! - Session cookies are `HttpOnly` and `SameSite=Lax`

/// Session data and the session layer
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, login_form, logout, signup, signup_form};
pub use sessions::{session_layer, AppSession, SessionData};
