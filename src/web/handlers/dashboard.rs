//! Dashboard page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::dashboard::{CATALOG_FEATURES, DashboardAction, student_id_for};
use crate::domain::entities::Role;
use crate::web::cookies::CurrentSession;

/// Inline notice rendered in place of a browser alert.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Inbox preview entry on the student dashboard.
#[derive(Debug, Clone, Copy)]
pub struct MessagePreview {
    pub sender: &'static str,
    pub subject: &'static str,
    pub unread: bool,
}

const INBOX_PREVIEW: &[MessagePreview] = &[
    MessagePreview {
        sender: "Registrar's Office",
        subject: "Spring registration opens Monday",
        unread: true,
    },
    MessagePreview {
        sender: "Dr. Sarah Johnson",
        subject: "CS 201 lab moved to room 114",
        unread: true,
    },
    MessagePreview {
        sender: "Student Services",
        subject: "Library hours over the break",
        unread: false,
    },
];

const QUICK_ACTIONS: [DashboardAction; 4] = [
    DashboardAction::RegisterForCourses,
    DashboardAction::DownloadTranscript,
    DashboardAction::PayTuition,
    DashboardAction::ContactSupport,
];

/// Template for the student dashboard.
///
/// Renders `templates/student.html` with:
/// - Student name and ID
/// - Quick action buttons
/// - Inbox preview
/// - Optional notice from the last action
#[derive(Template, WebTemplate)]
#[template(path = "student.html")]
pub struct StudentTemplate {
    pub display_name: String,
    pub student_id: &'static str,
    pub quick_actions: Vec<&'static str>,
    pub messages: &'static [MessagePreview],
    pub unread_count: usize,
    pub notice: Option<Notice>,
}

/// Template for the faculty and administrator landing pages.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub display_name: String,
    pub role: &'static str,
}

/// Template for the course catalog placeholder.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub display_name: String,
    pub features: &'static [&'static str],
}

/// Renders the student dashboard, or sends other roles to their own page.
pub(crate) fn student_page(current: &CurrentSession, notice: Option<Notice>) -> Response {
    if current.record.role != Role::Student {
        return Redirect::to(current.record.landing_path()).into_response();
    }

    let unread_count = INBOX_PREVIEW.iter().filter(|m| m.unread).count();
    tracing::debug!(unread_count, "Rendering student dashboard");

    StudentTemplate {
        display_name: current.record.display_name.clone(),
        student_id: student_id_for(&current.record.email),
        quick_actions: QUICK_ACTIONS.iter().map(|a| a.label()).collect(),
        messages: INBOX_PREVIEW,
        unread_count,
        notice,
    }
    .into_response()
}

fn staff_page(current: &CurrentSession, role: Role) -> Response {
    if current.record.role != role {
        return Redirect::to(current.record.landing_path()).into_response();
    }

    LandingTemplate {
        display_name: current.record.display_name.clone(),
        role: role.as_str(),
    }
    .into_response()
}

/// Sends the session to its role's landing page.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_home(Extension(current): Extension<CurrentSession>) -> Redirect {
    Redirect::to(current.record.landing_path())
}

/// # Endpoint
///
/// `GET /dashboard/student`
pub async fn student_dashboard(Extension(current): Extension<CurrentSession>) -> Response {
    student_page(&current, None)
}

/// # Endpoint
///
/// `GET /dashboard/faculty`
pub async fn faculty_dashboard(Extension(current): Extension<CurrentSession>) -> Response {
    staff_page(&current, Role::Faculty)
}

/// # Endpoint
///
/// `GET /dashboard/admin`
pub async fn admin_dashboard(Extension(current): Extension<CurrentSession>) -> Response {
    staff_page(&current, Role::Administrator)
}

/// Course catalog placeholder.
///
/// # Endpoint
///
/// `GET /dashboard/catalog`
pub async fn catalog_page(Extension(current): Extension<CurrentSession>) -> impl IntoResponse {
    CatalogTemplate {
        display_name: current.record.display_name,
        features: CATALOG_FEATURES,
    }
}
