use std::sync::Arc;

use crate::application::services::{AuthService, SessionService};
use crate::config::Config;
use crate::error::StoreError;
use crate::infrastructure::memory::{InMemorySessionStore, InMemoryUserRepository};

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryUserRepository>>,
    pub session_service: Arc<SessionService<InMemorySessionStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds state around the given directory and an empty session store.
    pub fn new(users: Arc<InMemoryUserRepository>, config: Config) -> Self {
        let auth_service = Arc::new(AuthService::new(users, config.login_policy()));
        let session_service = Arc::new(SessionService::new(Arc::new(
            InMemorySessionStore::new(),
        )));

        Self {
            auth_service,
            session_service,
            config: Arc::new(config),
        }
    }

    /// State backed by the demo directory.
    pub fn with_demo_users(config: Config) -> Result<Self, StoreError> {
        let users = InMemoryUserRepository::with_demo_users()?;
        Ok(Self::new(Arc::new(users), config))
    }
}
