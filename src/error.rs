//! Error types for the portal.
//!
//! - [`StoreError`] - failures of the user directory or session store
//! - [`AuthError`] - outcome taxonomy of a rejected login attempt
//! - [`AppError`] - HTTP-facing error rendered as a JSON body

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Shown for both unknown accounts and wrong secrets so that the response
/// never reveals whether an account exists.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

pub const LOCKED_MESSAGE: &str =
    "Account locked due to multiple failed attempts. Please contact IT support.";

pub const MISSING_INPUT_MESSAGE: &str = "Please enter both email and password.";

pub const MALFORMED_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

pub const UNAVAILABLE_MESSAGE: &str = "The portal is temporarily unavailable. Please try again.";

/// Failure of a backing store (user directory or session storage).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("corrupt entry: {0}")]
    Corrupt(String),

    #[error("secret hashing failed: {0}")]
    Hashing(String),
}

/// Why submitted credentials were rejected before any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    /// Email or password was empty.
    Missing,
    /// Email does not look like `local@domain.tld`.
    MalformedEmail,
}

/// Rejected login attempt.
///
/// `Display` is the internal description used in logs. Use
/// [`AuthError::user_message`] for anything shown to the person logging in.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid input: {0:?}")]
    InvalidInput(InputProblem),

    #[error("no account for identifier")]
    NotFound,

    #[error("account is locked")]
    Locked,

    #[error("wrong secret, {remaining} attempt(s) remaining")]
    WrongSecret { remaining: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Text rendered to the end user.
    ///
    /// `NotFound` and `WrongSecret` share the same text.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidInput(InputProblem::Missing) => MISSING_INPUT_MESSAGE,
            AuthError::InvalidInput(InputProblem::MalformedEmail) => MALFORMED_EMAIL_MESSAGE,
            AuthError::NotFound | AuthError::WrongSecret { .. } => INVALID_CREDENTIALS_MESSAGE,
            AuthError::Locked => LOCKED_MESSAGE,
            AuthError::Store(_) => UNAVAILABLE_MESSAGE,
        }
    }

    /// Stable machine-readable code used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidInput(_) => "invalid_input",
            AuthError::NotFound | AuthError::WrongSecret { .. } => "invalid_credentials",
            AuthError::Locked => "account_locked",
            AuthError::Store(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AuthError::NotFound | AuthError::WrongSecret { .. } => StatusCode::UNAUTHORIZED,
            AuthError::Locked => StatusCode::LOCKED,
            AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload shared by all API error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// HTTP-facing application error.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    Locked { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn locked(message: impl Into<String>, details: Value) -> Self {
        Self::Locked {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(&self) -> (StatusCode, &'static str, &str, &Value) {
        match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::Locked { message, details } => {
                (StatusCode::LOCKED, "account_locked", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message: message.to_string(),
            details: details.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (_, code, message, _) = self.parts();
        write!(f, "{code}: {message}")
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!(errors))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Store failure");
        AppError::internal(UNAVAILABLE_MESSAGE, json!({}))
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let message = err.user_message();
        match err {
            AuthError::InvalidInput(_) => {
                AppError::bad_request(message, json!({ "reason": err.code() }))
            }
            AuthError::NotFound | AuthError::WrongSecret { .. } => {
                AppError::unauthorized(message, json!({ "reason": err.code() }))
            }
            AuthError::Locked => AppError::locked(message, json!({ "reason": err.code() })),
            AuthError::Store(store) => store.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_account_and_wrong_secret_look_identical() {
        let not_found = AuthError::NotFound;
        let wrong = AuthError::WrongSecret { remaining: 2 };

        assert_eq!(not_found.user_message(), wrong.user_message());
        assert_eq!(not_found.code(), wrong.code());
        assert_eq!(not_found.status_code(), wrong.status_code());

        let a = AppError::from(not_found).to_error_info();
        let b = AppError::from(wrong).to_error_info();
        assert_eq!(a.message, b.message);
        assert_eq!(a.details, b.details);
    }

    #[test]
    fn test_locked_has_distinct_message() {
        let locked = AuthError::Locked;
        assert_eq!(locked.user_message(), LOCKED_MESSAGE);
        assert_ne!(locked.user_message(), INVALID_CREDENTIALS_MESSAGE);
        assert_eq!(locked.status_code(), StatusCode::LOCKED);
    }

    #[test]
    fn test_invalid_input_messages() {
        assert_eq!(
            AuthError::InvalidInput(InputProblem::Missing).user_message(),
            MISSING_INPUT_MESSAGE
        );
        assert_eq!(
            AuthError::InvalidInput(InputProblem::MalformedEmail).user_message(),
            MALFORMED_EMAIL_MESSAGE
        );
    }

    #[test]
    fn test_store_error_maps_to_internal() {
        let err: AppError = AuthError::Store(StoreError::Unavailable("down".into())).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_error_info().code, "internal_error");
    }
}
