//! Process-local session storage.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::SessionRecord;
use crate::domain::repositories::SessionStore;
use crate::error::StoreError;

/// Session entries kept as serialized JSON text, keyed by session key.
#[derive(Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        debug!("Using in-memory session store");
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, key: &str, record: &SessionRecord) -> Result<(), StoreError> {
        let text = record.to_json()?;
        self.entries.write().await.insert(key.to_string(), text);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<SessionRecord>, StoreError> {
        match self.entries.read().await.get(key) {
            Some(text) => SessionRecord::from_json(text).map(Some),
            None => Ok(None),
        }
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.entries.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use chrono::Utc;

    fn record() -> SessionRecord {
        SessionRecord {
            email: "john.smith@boolean.edu".to_string(),
            role: Role::Student,
            display_name: "John Smith".to_string(),
            login_time: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_get_remove() {
        let store = InMemorySessionStore::new();
        let record = record();

        store.insert("k1", &record).await.unwrap();
        assert_eq!(store.get("k1").await.unwrap(), Some(record));
        assert_eq!(store.count().await.unwrap(), 1);

        assert!(store.remove("k1").await.unwrap());
        assert!(!store.remove("k1").await.unwrap());
        assert_eq!(store.get("k1").await.unwrap(), None);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_key() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_entry_surfaces_error() {
        let store = InMemorySessionStore::new();
        store
            .entries
            .write()
            .await
            .insert("bad".to_string(), "not json".to_string());

        assert!(matches!(
            store.get("bad").await,
            Err(StoreError::Corrupt(_))
        ));
    }
}
