//! Email identifier normalization and validation.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::InputProblem;

/// Longest address accepted (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

/// `local@domain.tld` with no whitespace and exactly one `@`.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Trims surrounding whitespace and lowercases.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Checks a login submission before any directory lookup.
///
/// Expects `email` to be normalized already.
///
/// # Errors
///
/// - [`InputProblem::Missing`] if either field is empty
/// - [`InputProblem::MalformedEmail`] if the email fails the pattern
pub fn check_credentials(email: &str, secret: &str) -> Result<(), InputProblem> {
    if email.is_empty() || secret.is_empty() {
        return Err(InputProblem::Missing);
    }

    if !is_valid_email(email) {
        return Err(InputProblem::MalformedEmail);
    }

    Ok(())
}
