//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "user_directory": { "status": "ok", "message": "3 accounts, 0 locked" },
///     "session_store": { "status": "ok", "message": "1 active session(s)" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let directory_check = check_user_directory(&state).await;

    let session_check = check_session_store(&state).await;

    let all_healthy = directory_check.is_ok() && session_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            user_directory: directory_check,
            session_store: session_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_user_directory(state: &AppState) -> CheckStatus {
    match state.auth_service.user_status().await {
        Ok(users) if users.is_empty() => CheckStatus::error("Directory is empty"),
        Ok(users) => {
            let locked = users.iter().filter(|u| u.locked).count();
            CheckStatus::ok(format!("{} accounts, {} locked", users.len(), locked))
        }
        Err(e) => CheckStatus::error(format!("Directory error: {}", e)),
    }
}

async fn check_session_store(state: &AppState) -> CheckStatus {
    match state.session_service.active_count().await {
        Ok(count) => CheckStatus::ok(format!("{} active session(s)", count)),
        Err(e) => CheckStatus::error(format!("Session store error: {}", e)),
    }
}
