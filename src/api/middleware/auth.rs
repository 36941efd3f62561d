//! Session cookie middleware for the JSON API.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::web::cookies::{CurrentSession, session_key};
use crate::{error::AppError, state::AppState};

/// Resolves the `portal_session` cookie into a [`CurrentSession`].
///
/// # Authentication Flow
///
/// 1. Read the session key from the `portal_session` cookie
/// 2. Look the key up in the session store
/// 3. Insert the resolved [`CurrentSession`] as a request extension
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if the cookie is missing or the key is
/// unknown. Store failures surface as `500 Internal Server Error`.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/session", get(session_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = session_key(&jar).ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Session cookie is missing"}),
        )
    })?;

    let record = st.session_service.current(&key).await?.ok_or_else(|| {
        AppError::unauthorized("Unauthorized", json!({"reason": "Session has ended"}))
    })?;

    req.extensions_mut().insert(CurrentSession { key, record });

    Ok(next.run(req).await)
}
