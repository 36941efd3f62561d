//! Browser-side state: the session cookie and the remembered email.
//!
//! # Layout
//!
//! - `portal_session` - volatile; no `Max-Age`, so the browser drops it when
//!   the session ends. Holds the key of a server-side
//!   [`crate::domain::entities::SessionRecord`].
//! - `remembered_email` - durable (one year); the last email submitted with
//!   "remember me" checked. Independent of the session.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;

use crate::domain::entities::SessionRecord;
use crate::utils::email::normalize_email;

pub const SESSION_COOKIE: &str = "portal_session";
pub const REMEMBER_COOKIE: &str = "remembered_email";

const REMEMBER_MAX_AGE_DAYS: i64 = 365;

/// Session resolved by the auth middleware, available to handlers as an
/// [`axum::Extension`].
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub key: String,
    pub record: SessionRecord,
}

pub fn session_key(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

pub fn remembered_email(jar: &CookieJar) -> Option<String> {
    jar.get(REMEMBER_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

pub fn session_cookie(key: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, key))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn remember_cookie(email: String, secure: bool) -> Cookie<'static> {
    Cookie::build((REMEMBER_COOKIE, email))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(REMEMBER_MAX_AGE_DAYS))
        .build()
}

fn removal(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, "")).path("/").build()
}

/// Updates the remembered email after a login submission.
///
/// Checked: store the normalized email. Unchecked: forget it. An empty
/// submission leaves the cookie alone.
pub fn apply_remember_me(jar: CookieJar, raw_email: &str, remember: bool, secure: bool) -> CookieJar {
    let email = normalize_email(raw_email);
    if email.is_empty() {
        return jar;
    }

    if remember {
        jar.add(remember_cookie(email, secure))
    } else {
        jar.remove(removal(REMEMBER_COOKIE))
    }
}

/// Removes both the session and the remembered email.
pub fn clear_all(jar: CookieJar) -> CookieJar {
    jar.remove(removal(SESSION_COOKIE))
        .remove(removal(REMEMBER_COOKIE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_is_browser_session_scoped() {
        let cookie = session_cookie("abc".to_string(), false);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.max_age(), None);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_remember_me_checked_stores_normalized_email() {
        let jar = apply_remember_me(CookieJar::new(), " John.Smith@Boolean.edu ", true, false);

        assert_eq!(
            remembered_email(&jar).as_deref(),
            Some("john.smith@boolean.edu")
        );
        assert_eq!(
            jar.get(REMEMBER_COOKIE).unwrap().max_age(),
            Some(Duration::days(365))
        );
    }

    #[test]
    fn test_remember_me_unchecked_forgets() {
        let jar = CookieJar::new().add(Cookie::new(REMEMBER_COOKIE, "old@boolean.edu"));
        let jar = apply_remember_me(jar, "john.smith@boolean.edu", false, false);

        assert_eq!(remembered_email(&jar), None);
    }

    #[test]
    fn test_empty_submission_keeps_cookie() {
        let jar = CookieJar::new().add(Cookie::new(REMEMBER_COOKIE, "old@boolean.edu"));
        let jar = apply_remember_me(jar, "   ", true, false);

        assert_eq!(remembered_email(&jar).as_deref(), Some("old@boolean.edu"));
    }

    #[test]
    fn test_clear_all() {
        let jar = CookieJar::new()
            .add(Cookie::new(SESSION_COOKIE, "key"))
            .add(Cookie::new(REMEMBER_COOKIE, "john.smith@boolean.edu"));

        let jar = clear_all(jar);

        assert_eq!(session_key(&jar), None);
        assert_eq!(remembered_email(&jar), None);
    }
}
