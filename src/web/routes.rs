//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    action_submit, admin_dashboard, catalog_page, dashboard_home, faculty_dashboard, login_page,
    login_submit, logout_submit, message_open, student_dashboard,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Dashboard routes requiring a session.
///
/// Protected via [`crate::web::middleware::web_auth`], which redirects to
/// `/login` when no session is present.
///
/// # Endpoints
///
/// - `GET  /dashboard`            - Redirect to the session's landing page
/// - `GET  /dashboard/student`    - Student dashboard
/// - `GET  /dashboard/faculty`    - Faculty landing page
/// - `GET  /dashboard/admin`      - Administrator landing page
/// - `GET  /dashboard/catalog`    - Course catalog placeholder
/// - `POST /dashboard/actions`    - Dashboard button by label
/// - `POST /dashboard/messages`   - Open an inbox message
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_home))
        .route("/dashboard/student", get(student_dashboard))
        .route("/dashboard/faculty", get(faculty_dashboard))
        .route("/dashboard/admin", get(admin_dashboard))
        .route("/dashboard/catalog", get(catalog_page))
        .route("/dashboard/actions", post(action_submit))
        .route("/dashboard/messages", post(message_open))
}

/// Public routes.
///
/// # Endpoints
///
/// - `GET  /login`  - Login page
/// - `POST /login`  - Login form submission
/// - `POST /logout` - End the session and clear cookies
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login_submit))
        .route("/logout", post(logout_submit))
}
