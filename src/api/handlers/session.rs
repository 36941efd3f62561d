//! Handlers for session inspection and logout.

use axum::{Extension, Json, extract::State};
use axum_extra::extract::cookie::CookieJar;

use crate::api::dto::session::{LogoutResponse, SessionResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::{CurrentSession, clear_all, session_key};

/// Returns the session behind the `portal_session` cookie.
///
/// # Endpoint
///
/// `GET /api/session`
///
/// # Errors
///
/// Returns 401 Unauthorized when no session is present (via middleware).
pub async fn session_handler(
    Extension(current): Extension<CurrentSession>,
) -> Json<SessionResponse> {
    Json(current.record.into())
}

/// Ends the session and forgets the remembered email.
///
/// # Endpoint
///
/// `POST /api/logout`
///
/// Succeeds without a session too; `ended` tells whether one was removed.
pub async fn logout_handler(
    State(st): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<LogoutResponse>), AppError> {
    let ended = match session_key(&jar) {
        Some(key) => st.session_service.end(&key).await?,
        None => false,
    };

    Ok((clear_all(jar), Json(LogoutResponse { ended })))
}
