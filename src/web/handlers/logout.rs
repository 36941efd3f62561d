//! Logout handler.

use axum::{extract::State, response::Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;
use crate::web::cookies::{clear_all, session_key};

/// Ends the session and forgets the remembered email.
///
/// # Endpoint
///
/// `POST /logout`
///
/// Always clears both cookies and redirects to `/login`, even when no
/// session was present.
pub async fn logout_submit(State(st): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(key) = session_key(&jar)
        && let Err(e) = st.session_service.end(&key).await
    {
        tracing::warn!(error = %e, "Failed to remove session on logout");
    }

    (clear_all(jar), Redirect::to("/login"))
}
