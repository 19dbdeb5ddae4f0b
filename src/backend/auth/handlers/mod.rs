//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── signup.rs   - Signup form and registration
//! ├── login.rs    - Login form and credential check
//! └── logout.rs   - Logout
//! ```
//!
//! # Handlers
//!
//! - **`signup_form`** / **`signup`** - GET / POST /user/signup
//! - **`login_form`** / **`login`** - GET / POST /user/login
//! - **`logout`** - POST /user/logout (login required)

/// Signup handlers
pub mod signup;

/// Login handlers
pub mod login;

/// Logout handler
pub mod logout;

pub use login::{login, login_form};
pub use logout::logout;
pub use signup::{signup, signup_form};
