//! Cookie-based session middleware for the dashboard pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;
use crate::web::cookies::{CurrentSession, session_key};

/// Resolves the session for dashboard requests.
///
/// # Flow
///
/// 1. Read the `portal_session` cookie
/// 2. Look the key up in the session store
/// 3. On success, insert a [`CurrentSession`] extension and continue
/// 4. Otherwise redirect to `/login`
///
/// Unlike the API middleware, which answers `401 Unauthorized`, this one
/// redirects so the browser lands on the login form.
pub async fn layer(
    State(st): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let Some(key) = session_key(&jar) else {
        return Err(Redirect::to("/login"));
    };

    match st.session_service.current(&key).await {
        Ok(Some(record)) => {
            req.extensions_mut().insert(CurrentSession { key, record });
            Ok(next.run(req).await)
        }
        Ok(None) => Err(Redirect::to("/login")),
        Err(e) => {
            tracing::warn!(error = %e, "Session lookup failed");
            Err(Redirect::to("/login"))
        }
    }
}
