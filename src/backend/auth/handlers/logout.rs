//! Logout handler

use axum::response::Redirect;

use crate::backend::auth::sessions::AppSession;
use crate::backend::error::BackendError;

/// `POST /user/logout`: forget the user and go home
pub async fn logout(mut session: AppSession) -> Result<Redirect, BackendError> {
    if let Some(user_id) = session.snapshot().user_id {
        tracing::info!("User {} logged out", user_id);
    }

    session.log_out().await?;
    Ok(Redirect::to("/"))
}
