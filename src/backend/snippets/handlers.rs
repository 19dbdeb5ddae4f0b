/**
 * Snippet Handlers
 *
 * - `GET /` - latest snippets
 * - `GET /snippet/{id}` - one snippet, 404 when missing, expired or the id is
 *   not a positive integer
 * - `GET /snippet/new` - creation form (login required)
 * - `POST /snippet/new` - validate, insert, redirect 303 to the new snippet
 */

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use sqlx::PgPool;

use crate::backend::auth::sessions::AppSession;
use crate::backend::error::BackendError;
use crate::backend::store;
use crate::backend::views::{HtmlData, Templates};
use crate::shared::{FieldErrors, NewSnippet, Validated};

/// Flash shown after a snippet is saved
pub const SNIPPET_SAVED: &str = "Your snippet was saved successfully!";

/// Lifetime pre-selected on an empty form
const DEFAULT_EXPIRES: &str = "365";

/// Parse a path segment as a snippet id
///
/// Only positive integers are ids; anything else is treated as not found.
pub fn parse_snippet_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 1)
}

/// Home page
pub async fn home(
    State(pool): State<PgPool>,
    State(templates): State<Templates>,
    mut session: AppSession,
    uri: Uri,
) -> Result<Html<String>, BackendError> {
    let snippets = store::latest_snippets(&pool).await?;

    templates
        .render_page(&mut session, uri.path(), "home.page.html", HtmlData::with_snippets(snippets))
        .await
}

/// Show one snippet
pub async fn show_snippet(
    State(pool): State<PgPool>,
    State(templates): State<Templates>,
    mut session: AppSession,
    Path(raw_id): Path<String>,
    uri: Uri,
) -> Result<Html<String>, BackendError> {
    let id = parse_snippet_id(&raw_id).ok_or(BackendError::NotFound)?;

    let snippet = store::get_snippet(&pool, id)
        .await?
        .ok_or(BackendError::NotFound)?;

    templates
        .render_page(&mut session, uri.path(), "show.page.html", HtmlData::with_snippet(snippet))
        .await
}

/// Empty creation form
pub async fn new_snippet_form(
    State(templates): State<Templates>,
    mut session: AppSession,
    uri: Uri,
) -> Result<Html<String>, BackendError> {
    let form = NewSnippet {
        expires: DEFAULT_EXPIRES.to_string(),
        ..NewSnippet::default()
    };

    templates
        .render_page(
            &mut session,
            uri.path(),
            "new.page.html",
            HtmlData::with_form(form, FieldErrors::new()),
        )
        .await
}

/// Create a snippet
///
/// Invalid input re-renders the form (200) with the submitted values.
pub async fn create_snippet(
    State(pool): State<PgPool>,
    State(templates): State<Templates>,
    mut session: AppSession,
    uri: Uri,
    form: Result<Form<NewSnippet>, FormRejection>,
) -> Result<Response, BackendError> {
    let Form(form) = form.map_err(|e| {
        tracing::debug!("Rejected snippet form: {}", e);
        BackendError::bad_request("Bad Request")
    })?;

    match form.validate() {
        Validated::Invalid(form, failures) => {
            let page = templates
                .render_page(
                    &mut session,
                    uri.path(),
                    "new.page.html",
                    HtmlData::with_form(form, failures),
                )
                .await?;
            Ok(page.into_response())
        }
        Validated::Valid(form) => {
            let lifetime = form
                .lifetime()
                .ok_or_else(|| BackendError::bad_request("Bad Request"))?;
            let id = store::insert_snippet(&pool, &form.title, &form.content, lifetime).await?;
            tracing::info!("Created snippet {}", id);

            session.put_flash(SNIPPET_SAVED).await?;
            Ok(Redirect::to(&format!("/snippet/{}", id)).into_response())
        }
    }
}
