//! JSON API layer.
//!
//! The same login gate and dashboard actions as the web UI, answered with
//! JSON instead of HTML. Sessions still travel in the `portal_session`
//! cookie.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Session resolution, rate limiting and request tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
