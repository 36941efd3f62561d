//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod actions;
pub mod dev;
pub mod health;
pub mod login;
pub mod session;

pub use actions::action_handler;
pub use dev::{dev_reset_handler, dev_users_handler};
pub use health::health_handler;
pub use login::login_handler;
pub use session::{logout_handler, session_handler};
