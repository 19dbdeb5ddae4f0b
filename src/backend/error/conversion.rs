/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` so handlers can return
 * `Result<_, BackendError>` and use `?` freely.
 *
 * # Response Format
 *
 * A plain-text body holding `BackendError::message()` with the matching
 * status. Server errors are logged here, with their full cause, before the
 * generic body goes out.
 */

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!("Server error: {:?}", self);
        } else {
            tracing::debug!("Client error {}: {}", status, self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message(),
        )
            .into_response()
    }
}
