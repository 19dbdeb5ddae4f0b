/**
 * Session Management
 *
 * Sessions are cookie-identified records kept in a `tower-sessions` store.
 * All application state for a browser lives in a single [`SessionData`]
 * value under one key.
 *
 * Handlers never poke individual keys. They extract an [`AppSession`], read
 * its immutable snapshot, and write changes back with an explicit
 * [`AppSession::commit`]. The convenience operations (`put_flash`,
 * `pop_flash`, `log_in`, `log_out`, `ensure_csrf_token`) all go through that
 * one commit step.
 */

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use tower_sessions::{
    cookie::SameSite, Expiry, Session, SessionManagerLayer, SessionStore,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::csrf::generate_token;

/// Key the [`SessionData`] is stored under
pub const SESSION_DATA_KEY: &str = "snippetbox.data";

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "snippetbox.sid";

/// Everything the application keeps per browser session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// One-time message shown on the next rendered page
    pub flash: Option<String>,
    /// Id of the logged-in user
    pub user_id: Option<i64>,
    /// Token that state-changing requests must echo back
    pub csrf_token: Option<String>,
}

impl SessionData {
    /// True when a user id is present
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// A loaded session: the store handle plus a snapshot of its data
///
/// The snapshot only changes through [`AppSession::commit`].
#[derive(Debug, Clone)]
pub struct AppSession {
    session: Session,
    snapshot: SessionData,
}

impl AppSession {
    /// Look up the session's data, starting empty for new sessions
    pub async fn load(session: Session) -> Result<Self, BackendError> {
        let snapshot = session
            .get::<SessionData>(SESSION_DATA_KEY)
            .await?
            .unwrap_or_default();

        Ok(Self { session, snapshot })
    }

    /// The data as of the last load or commit
    pub fn snapshot(&self) -> &SessionData {
        &self.snapshot
    }

    /// Replace the session's data
    ///
    /// Writing identical data is a no-op, so read-only requests from new
    /// visitors never create a session record.
    pub async fn commit(&mut self, data: SessionData) -> Result<(), BackendError> {
        if data == self.snapshot {
            return Ok(());
        }

        self.session.insert(SESSION_DATA_KEY, &data).await?;
        self.snapshot = data;
        Ok(())
    }

    /// Store a flash message for the next page
    pub async fn put_flash(&mut self, message: impl Into<String>) -> Result<(), BackendError> {
        let data = SessionData {
            flash: Some(message.into()),
            ..self.snapshot.clone()
        };
        self.commit(data).await
    }

    /// Take the flash message, removing it from the session
    pub async fn pop_flash(&mut self) -> Result<Option<String>, BackendError> {
        let mut data = self.snapshot.clone();
        let flash = data.flash.take();
        self.commit(data).await?;
        Ok(flash)
    }

    /// Mark the session as belonging to `user_id`
    ///
    /// The session id is rotated first so a pre-login id cannot be reused.
    pub async fn log_in(&mut self, user_id: i64) -> Result<(), BackendError> {
        self.session.cycle_id().await?;

        let data = SessionData {
            user_id: Some(user_id),
            ..self.snapshot.clone()
        };
        self.commit(data).await
    }

    /// Forget the logged-in user, keeping the rest of the session
    pub async fn log_out(&mut self) -> Result<(), BackendError> {
        let data = SessionData {
            user_id: None,
            ..self.snapshot.clone()
        };
        self.commit(data).await
    }

    /// Return the session's CSRF token, issuing one if there is none yet
    pub async fn ensure_csrf_token(&mut self) -> Result<String, BackendError> {
        if let Some(token) = &self.snapshot.csrf_token {
            return Ok(token.clone());
        }

        let token = generate_token();
        let data = SessionData {
            csrf_token: Some(token.clone()),
            ..self.snapshot.clone()
        };
        self.commit(data).await?;
        Ok(token)
    }
}

impl<S> FromRequestParts<S> for AppSession
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(status, message)| {
                tracing::error!("Session layer missing: {}", message);
                BackendError::handler(status, message)
            })?;

        Self::load(session).await
    }
}

/// Build the session layer used by the router
///
/// Cookies are `HttpOnly`, `SameSite=Lax` and persist for `lifetime_hours`
/// after the last request.
pub fn session_layer<Store>(
    store: Store,
    lifetime_hours: i64,
    secure: bool,
) -> SessionManagerLayer<Store>
where
    Store: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_http_only(true)
        .with_secure(secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(lifetime_hours)))
}
