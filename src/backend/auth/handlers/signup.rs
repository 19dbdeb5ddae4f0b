/**
 * Signup Handlers
 *
 * `GET /user/signup` shows the form; `POST /user/signup` validates it,
 * creates the user and redirects to the login page.
 *
 * # Failure Handling
 *
 * - Rule violations re-show the form (200) with per-field messages
 * - A taken email re-shows the form with "Address is already in use" on the
 *   `email` field
 * - The password is never sent back to the browser
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
use crate::shared::forms::DUPLICATE_EMAIL;
use crate::shared::{FieldErrors, SignupUser, Validated};

/// Flash shown on the login page after a successful signup
pub const SIGNUP_DONE: &str = "Your signup was successful. Please log in using your credentials.";

async fn show_form(
    templates: &Templates,
    session: &mut AppSession,
    uri: &Uri,
    form: &SignupUser,
    failures: FieldErrors,
) -> Result<Html<String>, BackendError> {
    templates
        .render_page(
            session,
            uri.path(),
            "signup.page.html",
            HtmlData::with_form(form.redisplay(), failures),
        )
        .await
}

/// Empty signup form
pub async fn signup_form(
    State(templates): State<Templates>,
    mut session: AppSession,
    uri: Uri,
) -> Result<Html<String>, BackendError> {
    show_form(&templates, &mut session, &uri, &SignupUser::default(), FieldErrors::new()).await
}

/// Sign up handler
pub async fn signup(
    State(pool): State<PgPool>,
    State(templates): State<Templates>,
    mut session: AppSession,
    uri: Uri,
    form: Result<Form<SignupUser>, FormRejection>,
) -> Result<Response, BackendError> {
    let Form(form) = form.map_err(|e| {
        tracing::debug!("Rejected signup form: {}", e);
        BackendError::bad_request("Bad Request")
    })?;

    let form = match form.validate() {
        Validated::Valid(form) => form,
        Validated::Invalid(form, failures) => {
            let page = show_form(&templates, &mut session, &uri, &form, failures).await?;
            return Ok(page.into_response());
        }
    };

    match store::insert_user(&pool, &form.name, &form.email, &form.password).await {
        Ok(id) => {
            tracing::info!("Created user {}", id);
            session.put_flash(SIGNUP_DONE).await?;
            Ok(Redirect::to("/user/login").into_response())
        }
        Err(StoreError::DuplicateEmail) => {
            let mut failures = FieldErrors::new();
            failures.insert("email".to_string(), DUPLICATE_EMAIL.to_string());
            let page = show_form(&templates, &mut session, &uri, &form, failures).await?;
            Ok(page.into_response())
        }
        Err(e) => Err(e.into()),
    }
}
