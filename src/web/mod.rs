//! Web layer for the browser-based login gate and dashboard.
//!
//! Server-rendered with Askama templates. Handlers are thin adapters over
//! [`crate::application::services`].
//!
//! # Modules
//!
//! - [`cookies`] - Session and remember-me cookies
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Session resolution for dashboard routes
//! - [`routes`] - Route configuration

pub mod cookies;
pub mod handlers;
pub mod middleware;
pub mod routes;
