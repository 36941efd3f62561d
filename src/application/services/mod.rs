//! Business logic services for the application layer.

pub mod auth_service;
pub mod session_service;

pub use auth_service::{AuthService, DEFAULT_MAX_ATTEMPTS, LoginPolicy};
pub use session_service::SessionService;
