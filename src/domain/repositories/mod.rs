//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract; implementations live in
//! `crate::infrastructure::memory`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! - [`UserRepository`] - The user directory (credentials, counters, lock flags)
//! - [`SessionStore`] - Volatile session entries

pub mod session_store;
pub mod user_repository;

pub use session_store::SessionStore;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use session_store::MockSessionStore;
#[cfg(test)]
pub use user_repository::MockUserRepository;
