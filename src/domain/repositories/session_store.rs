//! Storage trait for volatile login sessions.

use crate::domain::entities::SessionRecord;
use crate::error::StoreError;
use async_trait::async_trait;

/// Volatile session storage, keyed by an opaque session key.
///
/// Entries live until they are removed on logout or the process exits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `record` under `key`, replacing any previous entry.
    async fn insert(&self, key: &str, record: &SessionRecord) -> Result<(), StoreError>;

    /// Reads the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the stored text cannot be decoded.
    async fn get(&self, key: &str) -> Result<Option<SessionRecord>, StoreError>;

    /// Removes the entry. Returns `false` if there was nothing to remove.
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// Number of live sessions.
    async fn count(&self) -> Result<usize, StoreError>;
}
