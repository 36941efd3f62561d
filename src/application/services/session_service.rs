//! Session handoff between the login flow and the dashboard.

use std::sync::Arc;

use crate::domain::entities::SessionRecord;
use crate::domain::repositories::SessionStore;
use crate::error::StoreError;
use crate::utils::session_key::generate_session_key;

/// Service that issues, resolves and ends sessions.
///
/// The session key is the only credential the browser holds; there is no
/// expiry and no signature.
pub struct SessionService<S: SessionStore> {
    store: Arc<S>,
}

impl<S: SessionStore> SessionService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Stores `record` under a fresh key and returns the key.
    pub async fn start(&self, record: &SessionRecord) -> Result<String, StoreError> {
        let key = generate_session_key();
        self.store.insert(&key, record).await?;

        tracing::debug!(email = %record.email, role = %record.role, "Session started");
        Ok(key)
    }

    /// Starts a session for `record`, first ending the one the client already
    /// holds.
    ///
    /// A store failure while ending `previous` is logged and does not prevent
    /// the new session.
    pub async fn rotate(
        &self,
        previous: Option<&str>,
        record: &SessionRecord,
    ) -> Result<String, StoreError> {
        if let Some(previous) = previous
            && let Err(e) = self.end(previous).await
        {
            tracing::warn!(error = %e, "Failed to end previous session");
        }

        self.start(record).await
    }

    /// The session stored under `key`, if any.
    pub async fn current(&self, key: &str) -> Result<Option<SessionRecord>, StoreError> {
        if key.is_empty() {
            return Ok(None);
        }
        self.store.get(key).await
    }

    /// Removes the session. Returns `false` if it did not exist.
    pub async fn end(&self, key: &str) -> Result<bool, StoreError> {
        if key.is_empty() {
            return Ok(false);
        }

        let removed = self.store.remove(key).await?;
        if removed {
            metrics::counter!("portal_logouts_total").increment(1);
            tracing::debug!("Session ended");
        }
        Ok(removed)
    }

    pub async fn active_count(&self) -> Result<usize, StoreError> {
        self.store.count().await
    }
}
