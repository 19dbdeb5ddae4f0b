/**
 * CSRF Protection Middleware
 *
 * Issues a per-session token on first contact and checks it on every
 * state-changing request.
 *
 * # Verification
 *
 * For POST, PUT, PATCH and DELETE the body is buffered (at most
 * [`MAX_FORM_BYTES`]), the token is read from the `X-CSRF-Token` header or
 * the `csrf_token` form field, and compared with the session's token.
 * A mismatch is answered with 400 before any handler runs. Otherwise the
 * buffered body is handed on untouched.
 */

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use rand::RngCore;

use crate::backend::auth::sessions::AppSession;
use crate::backend::error::BackendError;

/// Form field templates put the token in
pub const CSRF_FIELD: &str = "csrf_token";

/// Header accepted in place of the form field
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Largest body the middleware will buffer, the same as axum's `Form` default
pub const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

const TOKEN_BYTES: usize = 32;

/// A fresh random token, hex encoded
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compare two tokens without short-circuiting on the first differing byte
pub fn tokens_match(expected: &str, submitted: &str) -> bool {
    if expected.len() != submitted.len() {
        return false;
    }

    expected
        .bytes()
        .zip(submitted.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

fn is_unsafe(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// Pull the token out of a urlencoded body
fn token_from_form(body: &[u8]) -> Option<String> {
    serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
        .ok()?
        .into_iter()
        .find(|(key, _)| key == CSRF_FIELD)
        .map(|(_, value)| value)
}

/// CSRF middleware
pub async fn csrf_protect(
    mut session: AppSession,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let expected = session.ensure_csrf_token().await?;

    if !is_unsafe(request.method()) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_FORM_BYTES).await.map_err(|e| {
        tracing::warn!("Unreadable request body: {}", e);
        BackendError::bad_request("Bad Request")
    })?;

    let submitted = parts
        .headers
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| token_from_form(&bytes));

    match submitted {
        Some(token) if tokens_match(&expected, &token) => {
            let request = Request::from_parts(parts, Body::from(bytes));
            Ok(next.run(request).await)
        }
        _ => {
            tracing::warn!("CSRF token mismatch for {} {}", parts.method, parts.uri);
            Err(BackendError::bad_request("Bad Request"))
        }
    }
}
