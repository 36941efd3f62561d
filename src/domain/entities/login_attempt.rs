//! Audit entry for a login attempt.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::IpAddr;

/// One login attempt that got past input validation.
///
/// `details` records the internal reason ("User not found", "Account locked",
/// ...) that is deliberately not shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct LoginAttempt {
    pub timestamp: DateTime<Utc>,
    pub email: String,
    pub success: bool,
    pub details: String,
    pub client: Option<IpAddr>,
}

impl LoginAttempt {
    pub fn new(
        email: &str,
        success: bool,
        details: impl Into<String>,
        client: Option<IpAddr>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            email: email.to_string(),
            success,
            details: details.into(),
            client,
        }
    }

    /// Writes the attempt to the `login_attempt` tracing target.
    pub fn emit(&self) {
        let client = self
            .client
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "local".to_string());

        if self.success {
            tracing::info!(
                target: "login_attempt",
                timestamp = %self.timestamp.to_rfc3339(),
                email = %self.email,
                success = self.success,
                client = %client,
                "{}",
                self.details
            );
        } else {
            tracing::warn!(
                target: "login_attempt",
                timestamp = %self.timestamp.to_rfc3339(),
                email = %self.email,
                success = self.success,
                client = %client,
                "{}",
                self.details
            );
        }
    }
}
