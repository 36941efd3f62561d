//! DTOs for dashboard actions.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dashboard::ActionOutcome;

/// A dashboard button identified by its visible label.
#[derive(Debug, Deserialize, Validate)]
pub struct ActionRequest {
    #[validate(length(min = 1, max = 64))]
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub action: &'static str,
    pub outcome: ActionOutcome,
}
