//! DTOs for developer helpers.

use serde::Serialize;

use crate::domain::entities::UserStatus;

#[derive(Debug, Serialize)]
pub struct UserStatusResponse {
    pub total: usize,
    pub users: Vec<UserStatus>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    /// Number of accounts whose counters were cleared.
    pub reset: usize,
}
