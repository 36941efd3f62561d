//! Handler for dashboard actions.

use axum::{Extension, Json};
use serde_json::json;
use validator::Validate;

use crate::api::dto::action::{ActionRequest, ActionResponse};
use crate::domain::dashboard::DashboardAction;
use crate::error::AppError;
use crate::web::cookies::CurrentSession;

/// Resolves a dashboard button by its label.
///
/// # Endpoint
///
/// `POST /api/dashboard/actions`
///
/// # Request Body
///
/// ```json
/// { "action": "Browse Catalog" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "action": "Browse Catalog",
///   "outcome": { "kind": "navigate", "destination": "catalog", "location": "/dashboard/catalog" }
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: empty or oversized label
/// - **401 Unauthorized**: no session (via middleware)
/// - **404 Not Found**: label matches no dashboard button
pub async fn action_handler(
    Extension(current): Extension<CurrentSession>,
    Json(payload): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;

    let label = payload.action.trim();
    let action = DashboardAction::from_label(label).ok_or_else(|| {
        AppError::not_found(
            "Unknown dashboard action",
            json!({ "action": label }),
        )
    })?;

    tracing::info!(
        email = %current.record.email,
        action = action.label(),
        "Dashboard action"
    );

    Ok(Json(ActionResponse {
        action: action.label(),
        outcome: action.outcome(),
    }))
}
