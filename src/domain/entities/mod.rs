//! Core domain entities.
//!
//! - [`UserRecord`] - A directory entry with its attempt counter and lock flag
//! - [`SessionRecord`] - The record handed from login to the dashboard
//! - [`LoginAttempt`] - Audit entry for an attempt
//!
//! Creation input follows the "New" type pattern: [`NewUser`] seeds a
//! [`UserRecord`].

pub mod login_attempt;
pub mod session;
pub mod user;

pub use login_attempt::LoginAttempt;
pub use session::SessionRecord;
pub use user::{AccountState, NewUser, Role, UserRecord, UserStatus};
