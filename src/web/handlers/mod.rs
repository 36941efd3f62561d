//! HTML handlers for the login gate and dashboard.

mod actions;
mod dashboard;
mod login;
mod logout;

pub use actions::{action_submit, message_open};
pub use dashboard::{
    admin_dashboard, catalog_page, dashboard_home, faculty_dashboard, student_dashboard,
};
pub use login::{login_page, login_submit};
pub use logout::logout_submit;
