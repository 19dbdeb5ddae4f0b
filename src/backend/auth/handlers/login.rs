/**
 * Login Handlers
 *
 * `GET /user/login` shows the form; `POST /user/login` checks the
 * credentials, stores the user id in a freshly rotated session and
 * redirects to the snippet form.
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same `generic` form message
 * - The session id is rotated on login
 */

use axum::{
    extract::{rejection::FormRejection, State},
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use sqlx::PgPool;

use crate::backend::auth::sessions::AppSession;
use crate::backend::error::BackendError;
use crate::backend::store::{self, StoreError};
use crate::backend::views::{HtmlData, Templates};
use crate::shared::forms::INVALID_CREDENTIALS;
use crate::shared::{FieldErrors, LoginUser, Validated};

/// Form key for failures not tied to one field
pub const GENERIC_FAILURE: &str = "generic";

async fn show_form(
    templates: &Templates,
    session: &mut AppSession,
    uri: &Uri,
    form: &LoginUser,
    failures: FieldErrors,
) -> Result<Html<String>, BackendError> {
    templates
        .render_page(
            session,
            uri.path(),
            "login.page.html",
            HtmlData::with_form(form.redisplay(), failures),
        )
        .await
}

/// Empty login form
pub async fn login_form(
    State(templates): State<Templates>,
    mut session: AppSession,
    uri: Uri,
) -> Result<Html<String>, BackendError> {
    show_form(&templates, &mut session, &uri, &LoginUser::default(), FieldErrors::new()).await
}

/// Login handler
pub async fn login(
    State(pool): State<PgPool>,
    State(templates): State<Templates>,
    mut session: AppSession,
    uri: Uri,
    form: Result<Form<LoginUser>, FormRejection>,
) -> Result<Response, BackendError> {
    let Form(form) = form.map_err(|e| {
        tracing::debug!("Rejected login form: {}", e);
        BackendError::bad_request("Bad Request")
    })?;

    let form = match form.validate() {
        Validated::Valid(form) => form,
        Validated::Invalid(form, failures) => {
            let page = show_form(&templates, &mut session, &uri, &form, failures).await?;
            return Ok(page.into_response());
        }
    };

    match store::verify_user(&pool, &form.email, &form.password).await {
        Ok(user_id) => {
            session.log_in(user_id).await?;
            tracing::info!("User {} logged in", user_id);
            Ok(Redirect::to("/snippet/new").into_response())
        }
        Err(StoreError::InvalidCredentials) => {
            let mut failures = FieldErrors::new();
            failures.insert(GENERIC_FAILURE.to_string(), INVALID_CREDENTIALS.to_string());
            let page = show_form(&templates, &mut session, &uri, &form, failures).await?;
            Ok(page.into_response())
        }
        Err(e) => Err(e.into()),
    }
}
