//! # Boolean University Portal
//!
//! A demo login gate and student dashboard built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps the layer separation of a clean architecture:
//!
//! - **Domain Layer** ([`domain`]) - Users, sessions, dashboard actions and repository traits
//! - **Application Layer** ([`application`]) - Authentication state machine and session handoff
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory user directory and session store
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered login page and dashboards
//!
//! ## Features
//!
//! - Case-insensitive email lookup against a seeded directory
//! - Per-account lockout after consecutive wrong passwords
//! - Identical responses for unknown accounts and wrong passwords
//! - Cookie-backed sessions and "remember me"
//! - Rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # open http://localhost:3000/login
//! # john.smith@boolean.edu / student123
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LoginPolicy, SessionService};
    pub use crate::domain::entities::{Role, SessionRecord, UserRecord};
    pub use crate::error::{AppError, AuthError};
    pub use crate::infrastructure::memory::{InMemorySessionStore, InMemoryUserRepository};
    pub use crate::state::AppState;
}
