//! Repository trait for the user directory.

use crate::domain::entities::UserRecord;
use crate::error::StoreError;
use async_trait::async_trait;

/// Access to the user directory.
///
/// The authentication service reads a record, applies the attempt/lockout
/// transition, and writes the record back with [`UserRepository::save`].
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryUserRepository`] - seeded, process-local
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a record by its lowercase email.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the directory cannot be read.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Replaces the stored record with the same email.
    ///
    /// Records are never created or deleted through this call.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if no record with that email exists
    /// or the directory cannot be written.
    async fn save(&self, user: &UserRecord) -> Result<(), StoreError>;

    /// Lists every record, ordered by email.
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;
}
