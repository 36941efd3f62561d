//! Process-local user directory.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, Role, UserRecord};
use crate::domain::repositories::UserRepository;
use crate::error::StoreError;

/// The three demo accounts the portal ships with.
pub fn demo_users() -> Vec<NewUser> {
    vec![
        NewUser {
            email: "john.smith@boolean.edu".to_string(),
            secret: "student123".to_string(),
            role: Role::Student,
            display_name: "John Smith".to_string(),
        },
        NewUser {
            email: "sarah.johnson@boolean.edu".to_string(),
            secret: "faculty123".to_string(),
            role: Role::Faculty,
            display_name: "Dr. Sarah Johnson".to_string(),
        },
        NewUser {
            email: "michael.brown@boolean.edu".to_string(),
            secret: "admin123".to_string(),
            role: Role::Administrator,
            display_name: "Michael Brown".to_string(),
        },
    ]
}

/// User directory seeded at construction and mutated in place.
///
/// Nothing is persisted; a restart brings every account back to its seeded
/// state.
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<String, UserRecord>>,
}

impl InMemoryUserRepository {
    /// Builds the directory, hashing every seeded secret.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Hashing`] if a secret cannot be hashed.
    pub fn new(seed: impl IntoIterator<Item = NewUser>) -> Result<Self, StoreError> {
        let users = seed
            .into_iter()
            .map(|new| UserRecord::try_from(new).map(|record| (record.email.clone(), record)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self {
            users: RwLock::new(users),
        })
    }

    /// Directory holding [`demo_users`].
    pub fn with_demo_users() -> Result<Self, StoreError> {
        Self::new(demo_users())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn save(&self, user: &UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.email) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(StoreError::Unavailable(format!(
                "no directory entry for {}",
                user.email
            ))),
        }
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.users.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_lookup() {
        let repo = InMemoryUserRepository::with_demo_users().unwrap();

        let john = repo
            .find_by_email("john.smith@boolean.edu")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(john.role, Role::Student);
        assert_eq!(john.display_name, "John Smith");
        assert!(john.secret_matches("student123"));

        assert!(
            repo.find_by_email("nobody@boolean.edu")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_seed_is_lowercased() {
        let repo = InMemoryUserRepository::new(vec![NewUser {
            email: "Jane.Doe@Boolean.EDU".to_string(),
            secret: "pw".to_string(),
            role: Role::Student,
            display_name: "Jane Doe".to_string(),
        }])
        .unwrap();

        assert!(
            repo.find_by_email("jane.doe@boolean.edu")
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_save_mutates_in_place() {
        let repo = InMemoryUserRepository::with_demo_users().unwrap();
        let mut john = repo
            .find_by_email("john.smith@boolean.edu")
            .await
            .unwrap()
            .unwrap();

        john.failed_attempts = 2;
        repo.save(&john).await.unwrap();

        let stored = repo
            .find_by_email("john.smith@boolean.edu")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.failed_attempts, 2);
    }

    #[tokio::test]
    async fn test_save_never_creates() {
        let repo = InMemoryUserRepository::with_demo_users().unwrap();
        let mut ghost = repo
            .find_by_email("john.smith@boolean.edu")
            .await
            .unwrap()
            .unwrap();
        ghost.email = "ghost@boolean.edu".to_string();

        assert!(repo.save(&ghost).await.is_err());
        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_is_ordered() {
        let repo = InMemoryUserRepository::with_demo_users().unwrap();
        let emails: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();

        assert_eq!(
            emails,
            vec![
                "john.smith@boolean.edu",
                "michael.brown@boolean.edu",
                "sarah.johnson@boolean.edu",
            ]
        );
    }
}
