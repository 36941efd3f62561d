//! Application layer services implementing the login flow.
//!
//! Services consume repository traits and expose request/response style
//! operations to the web, API and CLI adapters.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential check and lockout state machine
//! - [`services::session_service::SessionService`] - Session issue, lookup and logout

pub mod services;
