//! DTOs for session inspection.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Role, SessionRecord};

/// Public view of a [`SessionRecord`].
///
/// Uses the same key names as the stored record.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub email: String,
    pub role: Role,
    #[serde(rename = "fullName")]
    pub display_name: String,
    #[serde(rename = "loginTime")]
    pub login_time: DateTime<Utc>,
}

impl From<SessionRecord> for SessionResponse {
    fn from(record: SessionRecord) -> Self {
        Self {
            email: record.email,
            role: record.role,
            display_name: record.display_name,
            login_time: record.login_time,
        }
    }
}

/// Result of `POST /api/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    /// Whether a server-side session was found and removed.
    pub ended: bool,
}
