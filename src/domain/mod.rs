//! Domain layer: entities, repository contracts and the dashboard action table.
//!
//! - [`entities`] - Users, sessions and login attempt records
//! - [`repositories`] - Storage trait definitions
//! - [`dashboard`] - Dashboard button lookup table
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. The attempt/lockout state machine lives in
//! [`crate::application::services::AuthService`].

pub mod dashboard;
pub mod entities;
pub mod repositories;
