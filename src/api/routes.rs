//! API route configuration.
//!
//! Mounted under `/api`. Session-bound endpoints are protected by
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    action_handler, dev_reset_handler, dev_users_handler, login_handler, logout_handler,
    session_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Endpoints that work without a session.
///
/// # Endpoints
///
/// - `POST /login`  - Authenticate and start a session
/// - `POST /logout` - End the session, if any, and clear cookies
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
}

/// Endpoints requiring a session cookie.
///
/// # Endpoints
///
/// - `GET  /session`           - Current session record
/// - `POST /dashboard/actions` - Resolve a dashboard button by label
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(session_handler))
        .route("/dashboard/actions", post(action_handler))
}

/// Developer helpers, mounted only when `DEV_TOOLS` is enabled.
///
/// # Endpoints
///
/// - `GET  /dev/users` - Attempt counters and lock flags of every account
/// - `POST /dev/reset` - Clear all counters and locks
pub fn dev_routes() -> Router<AppState> {
    Router::new()
        .route("/dev/users", get(dev_users_handler))
        .route("/dev/reset", post(dev_reset_handler))
}
