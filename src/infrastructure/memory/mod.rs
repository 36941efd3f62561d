//! In-memory storage backends.
//!
//! - [`InMemoryUserRepository`] - Seeded user directory
//! - [`InMemorySessionStore`] - Volatile session entries

mod session_store;
mod user_directory;

pub use session_store::InMemorySessionStore;
pub use user_directory::{InMemoryUserRepository, demo_users};
