//! Developer helpers for inspecting and resetting lockouts.
//!
//! Mounted only when `DEV_TOOLS=true`.

use axum::{Json, extract::State};

use crate::api::dto::dev::{ResetResponse, UserStatusResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists attempt counters and lock flags.
///
/// # Endpoint
///
/// `GET /api/dev/users`
pub async fn dev_users_handler(
    State(st): State<AppState>,
) -> Result<Json<UserStatusResponse>, AppError> {
    let users = st.auth_service.user_status().await?;

    Ok(Json(UserStatusResponse {
        total: users.len(),
        users,
    }))
}

/// Clears every counter and lock.
///
/// # Endpoint
///
/// `POST /api/dev/reset`
pub async fn dev_reset_handler(
    State(st): State<AppState>,
) -> Result<Json<ResetResponse>, AppError> {
    let reset = st.auth_service.reset_all_attempts().await?;
    Ok(Json(ResetResponse { reset }))
}
