/**
 * Backend Error Types
 *
 * This module defines the errors a request handler can fail with.
 * Every variant maps to exactly one HTTP status:
 *
 * - `HandlerError` - a status chosen by the handler (400 for undecodable forms,
 *   CSRF failures)
 * - `NotFound` - missing or expired snippets, bad ids, unknown routes
 * - `Store` - database, hashing; always 500 (credential and duplicate-email
 *   kinds are handled inline by the handlers and never reach here)
 * - `Template` - template lookup or render failure; 500
 * - `Session` - session store failure; 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Errors a request can fail with
///
/// # Usage
///
/// ```rust
/// use snippetbox::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., undecodable form body, CSRF mismatch)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The requested resource does not exist (or has expired)
    #[error("Not found")]
    NotFound,

    /// Store error (database, password hashing)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Template lookup or rendering error
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Session load or save error
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 400 with the given message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Template(_) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for errors the client did not cause
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the message sent to the client
    ///
    /// Server errors never expose their cause; the body is the status text.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } if !self.is_server_error() => message.clone(),
            _ => self
                .status_code()
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
        }
    }
}
