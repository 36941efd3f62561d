//! Dashboard button handlers.

use axum::{
    Extension, Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::dashboard::{Notice, student_page};
use crate::domain::dashboard::{ActionOutcome, DashboardAction, message_notice};
use crate::web::cookies::CurrentSession;

#[derive(Debug, Deserialize)]
pub struct ActionForm {
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageForm {
    pub sender: String,
}

/// Resolves a dashboard button by its label.
///
/// # Endpoint
///
/// `POST /dashboard/actions`
///
/// Navigations become a redirect; notices re-render the dashboard with the
/// notice shown. Unknown labels are logged and lead back to the landing page.
pub async fn action_submit(
    Extension(current): Extension<CurrentSession>,
    Form(form): Form<ActionForm>,
) -> Response {
    let Some(action) = DashboardAction::from_label(form.action.trim()) else {
        tracing::info!(action = %form.action, "Quick action");
        return Redirect::to(current.record.landing_path()).into_response();
    };

    render_outcome(&current, action.outcome())
}

/// Opens a message from the inbox preview.
///
/// # Endpoint
///
/// `POST /dashboard/messages`
pub async fn message_open(
    Extension(current): Extension<CurrentSession>,
    Form(form): Form<MessageForm>,
) -> Response {
    render_outcome(&current, message_notice(form.sender.trim()))
}

fn render_outcome(current: &CurrentSession, outcome: ActionOutcome) -> Response {
    match outcome {
        ActionOutcome::Navigate { location, .. } => Redirect::to(location).into_response(),
        ActionOutcome::Notify { title, message } => {
            student_page(current, Some(Notice { title, message }))
        }
    }
}
