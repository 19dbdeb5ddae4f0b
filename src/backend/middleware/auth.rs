/**
 * Login Gate
 *
 * Wraps the routes that need a logged-in user. Anonymous visitors are sent
 * to the login page with a 302 instead of getting an error.
 */

use axum::{
    extract::Request,
    http::{header::LOCATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::auth::sessions::AppSession;

/// Where anonymous visitors are sent
pub const LOGIN_PATH: &str = "/user/login";

/// Require a logged-in session
pub async fn require_login(session: AppSession, request: Request, next: Next) -> Response {
    if session.snapshot().is_logged_in() {
        return next.run(request).await;
    }

    tracing::debug!("Anonymous request to {} redirected to login", request.uri());
    (StatusCode::FOUND, [(LOCATION, LOGIN_PATH)]).into_response()
}
