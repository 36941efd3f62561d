//! Infrastructure layer implementing the domain storage traits.
//!
//! - [`memory`] - Process-local directory and session store
//!
//! Swapping these for a persistent credential store means implementing
//! [`crate::domain::repositories::UserRepository`] and
//! [`crate::domain::repositories::SessionStore`] elsewhere.

pub mod memory;
