//! Session handed from the login flow to the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{Role, UserRecord};
use crate::error::StoreError;

/// Who is logged in, as seen by the dashboard.
///
/// Stored as JSON text with the keys `email`, `role`, `fullName` and
/// `loginTime`. There is no expiry and no signature: whoever holds the
/// session key is trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub email: String,
    pub role: Role,
    #[serde(rename = "fullName")]
    pub display_name: String,
    #[serde(rename = "loginTime")]
    pub login_time: DateTime<Utc>,
}

impl SessionRecord {
    pub fn for_user(user: &UserRecord, login_time: DateTime<Utc>) -> Self {
        Self {
            email: user.email.clone(),
            role: user.role,
            display_name: user.display_name.clone(),
            login_time,
        }
    }

    pub fn landing_path(&self) -> &'static str {
        self.role.landing_path()
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        serde_json::from_str(text).map_err(|e| StoreError::Corrupt(e.to_string()))
    }
}
