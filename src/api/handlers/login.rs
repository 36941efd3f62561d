//! Handler for the login endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State},
};
use axum_extra::extract::cookie::CookieJar;
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::cookies::{apply_remember_me, session_cookie, session_key};

/// Authenticates credentials and starts a session.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "john.smith@boolean.edu",
///   "password": "student123",
///   "remember": true
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "session": {
///     "email": "john.smith@boolean.edu",
///     "role": "Student",
///     "fullName": "John Smith",
///     "loginTime": "2024-01-01T00:00:00Z"
///   },
///   "redirect": "/dashboard/student",
///   "message": "Welcome back, John Smith!"
/// }
/// ```
///
/// Sets the `portal_session` cookie on success, ending any session the
/// client already held. `remembered_email` is updated
/// on every submission that passes the length checks, whatever the outcome.
///
/// # Errors
///
/// - **400 Bad Request**: empty fields, malformed email or oversized input
/// - **401 Unauthorized**: unknown email or wrong password (identical body)
/// - **423 Locked**: account locked
pub async fn login_handler(
    State(st): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), (CookieJar, AppError)> {
    if let Err(e) = payload.validate() {
        return Err((jar, e.into()));
    }

    let previous = session_key(&jar);
    let jar = apply_remember_me(jar, &payload.email, payload.remember, st.config.cookie_secure);

    let result = st
        .auth_service
        .authenticate_from(&payload.email, &payload.password, addr.ip())
        .await;
    let record = match result {
        Ok(record) => record,
        Err(e) => return Err((jar, e.into())),
    };

    let key = match st.session_service.rotate(previous.as_deref(), &record).await {
        Ok(key) => key,
        Err(e) => return Err((jar, e.into())),
    };

    let response = LoginResponse {
        redirect: record.landing_path(),
        message: format!("Welcome back, {}!", record.display_name),
        session: record.into(),
    };

    Ok((jar.add(session_cookie(key, st.config.cookie_secure)), Json(response)))
}
