/**
 * Router Configuration
 *
 * Combines every route and middleware layer into a single Axum router.
 *
 * # Layer Order
 *
 * From the outside in:
 * 1. Request logging
 * 2. Security headers (also applied to static files and errors)
 * 3. Session layer
 * 4. CSRF issuance and verification (page routes only)
 * 5. Login gate (protected routes only)
 *
 * # Route Priority
 *
 * `/snippet/new` is a static segment and wins over `/snippet/{id}`.
 */

use axum::{
    http::{header, HeaderValue},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};
use tower_sessions::SessionStore;

use crate::backend::auth::{self, sessions::session_layer};
use crate::backend::error::BackendError;
use crate::backend::middleware::{csrf_protect, log_request, require_login};
use crate::backend::server::state::AppState;
use crate::backend::snippets;
use crate::shared::ServerConfig;

/// Create the Axum router with all routes configured
///
/// Generic over the session store so tests can run against an in-memory
/// store while production uses Postgres.
///
/// # Routes
///
/// | Method | Path | Login |
/// |---|---|---|
/// | GET | `/` | |
/// | GET | `/snippet/{id}` | |
/// | GET, POST | `/snippet/new` | required |
/// | GET, POST | `/user/signup` | |
/// | GET, POST | `/user/login` | |
/// | POST | `/user/logout` | required |
/// | GET | `/static/*` | |
pub fn create_router<Store>(app_state: AppState, session_store: Store, config: &ServerConfig) -> Router
where
    Store: SessionStore + Clone,
{
    let protected = Router::new()
        .route(
            "/snippet/new",
            get(snippets::new_snippet_form).post(snippets::create_snippet),
        )
        .route("/user/logout", post(auth::logout))
        .route_layer(from_fn(require_login));

    Router::new()
        .route("/", get(snippets::home))
        .route("/snippet/{id}", get(snippets::show_snippet))
        .route("/user/signup", get(auth::signup_form).post(auth::signup))
        .route("/user/login", get(auth::login_form).post(auth::login))
        .merge(protected)
        .layer(from_fn(csrf_protect))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(not_found)
        .layer(session_layer(
            session_store,
            config.session_lifetime_hours,
            config.session_secure,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("deny"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(from_fn(log_request))
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::NotFound
}
