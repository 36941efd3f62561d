//! Login page and form submission handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::net::SocketAddr;

use crate::error::AuthError;
use crate::state::AppState;
use crate::web::cookies::{apply_remember_me, remembered_email, session_cookie, session_key};

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Email and password fields
/// - "Remember me" checkbox
/// - Inline error message after a failed attempt
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub remember: bool,
    pub error: Option<&'static str>,
}

/// Template shown after a successful login.
///
/// Navigates to the role landing page after `redirect_delay_secs`.
#[derive(Template, WebTemplate)]
#[template(path = "welcome.html")]
pub struct WelcomeTemplate {
    pub display_name: String,
    pub landing_path: &'static str,
    pub redirect_delay_secs: u64,
}

/// Submitted login form. The checkbox sends `remember=on` only when checked.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remember: Option<String>,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// Pre-fills the email and checks "remember me" when a remembered email
/// cookie is present.
pub async fn login_page(jar: CookieJar) -> impl IntoResponse {
    let remembered = remembered_email(&jar);

    LoginTemplate {
        remember: remembered.is_some(),
        email: remembered.unwrap_or_default(),
        error: None,
    }
}

/// Handles a login form submission.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Responses
///
/// - **200 OK**: welcome page; sets the `portal_session` cookie and ends any
///   session the browser already held
/// - **400 Bad Request**: missing or malformed input
/// - **401 Unauthorized**: unknown email or wrong password (identical body)
/// - **423 Locked**: account locked
///
/// Every failure re-renders the form with an inline message. The remembered
/// email cookie is updated on every submission regardless of outcome.
pub async fn login_submit(
    State(st): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let remember = form.remember.is_some();
    let previous = session_key(&jar);
    let jar = apply_remember_me(jar, &form.email, remember, st.config.cookie_secure);

    let result = st
        .auth_service
        .authenticate_from(&form.email, &form.password, addr.ip())
        .await;

    let record = match result {
        Ok(record) => record,
        Err(err) => return failed_login(jar, &form.email, remember, err),
    };

    match st.session_service.rotate(previous.as_deref(), &record).await {
        Ok(key) => {
            let jar = jar.add(session_cookie(key, st.config.cookie_secure));
            let page = WelcomeTemplate {
                display_name: record.display_name,
                landing_path: record.role.landing_path(),
                redirect_delay_secs: st.config.redirect_delay_secs,
            };
            (jar, page).into_response()
        }
        Err(e) => failed_login(jar, &form.email, remember, AuthError::Store(e)),
    }
}

fn failed_login(jar: CookieJar, email: &str, remember: bool, err: AuthError) -> Response {
    if let AuthError::Store(store) = &err {
        tracing::error!(error = %store, "Login could not be completed");
    }

    let status: StatusCode = err.status_code();
    let page = LoginTemplate {
        email: email.trim().to_string(),
        remember,
        error: Some(err.user_message()),
    };

    (status, jar, page).into_response()
}
