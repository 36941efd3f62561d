//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies derive [`validator::Validate`]; handlers call `validate()`
//! before touching any service.

pub mod action;
pub mod dev;
pub mod health;
pub mod login;
pub mod session;
