/**
 * Application State
 *
 * `AppState` is the explicit context handed to every handler: the database
 * pool and the loaded templates. The `FromRef` implementations let handlers
 * extract just the part they need, e.g. `State(pool): State<PgPool>`.
 *
 * Sessions are not part of the state; they arrive through the session layer
 * and the `AppSession` extractor.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::views::Templates;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Parsed page templates
    pub templates: Templates,
}

impl AppState {
    pub fn new(db_pool: PgPool, templates: Templates) -> Self {
        Self { db_pool, templates }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Templates {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.templates.clone()
    }
}
