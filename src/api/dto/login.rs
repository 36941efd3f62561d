//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::session::SessionResponse;

/// Login request body.
///
/// Only length caps are enforced here. Emptiness and email shape are checked
/// by the auth service so that the API and the web form reject the same input
/// with the same message.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 128))]
    pub password: String,

    /// Store the email in the `remembered_email` cookie.
    #[serde(default)]
    pub remember: bool,
}

/// Successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub session: SessionResponse,
    /// Landing page for the session's role.
    pub redirect: &'static str,
    pub message: String,
}
