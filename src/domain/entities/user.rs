//! User directory entity and role model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::email::normalize_email;
use crate::error::StoreError;
use crate::utils::secret::{hash_secret, secret_matches};

/// Portal role. Decides which landing page a session is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Faculty,
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
            Role::Administrator => "Administrator",
        }
    }

    /// Path of the dashboard page for this role.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Student => "/dashboard/student",
            Role::Faculty => "/dashboard/faculty",
            Role::Administrator => "/dashboard/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lockout state derived from a [`UserRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    Active,
    Locked,
}

/// A directory entry.
///
/// The secret is kept only as an Argon2id PHC string. Verification accepts
/// exactly the seeded secret, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    pub secret_hash: String,
    pub role: Role,
    pub display_name: String,
    pub failed_attempts: u32,
    pub locked: bool,
}

impl UserRecord {
    pub fn state(&self) -> AccountState {
        if self.locked {
            AccountState::Locked
        } else {
            AccountState::Active
        }
    }

    pub fn secret_matches(&self, candidate: &str) -> bool {
        secret_matches(&self.secret_hash, candidate)
    }

    pub fn status(&self) -> UserStatus {
        UserStatus {
            email: self.email.clone(),
            role: self.role,
            attempts: self.failed_attempts,
            locked: self.locked,
        }
    }
}

/// Input data for seeding a directory entry.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub secret: String,
    pub role: Role,
    pub display_name: String,
}

impl TryFrom<NewUser> for UserRecord {
    type Error = StoreError;

    fn try_from(new: NewUser) -> Result<Self, Self::Error> {
        Ok(Self {
            email: normalize_email(&new.email),
            secret_hash: hash_secret(&new.secret)?,
            role: new.role,
            display_name: new.display_name,
            failed_attempts: 0,
            locked: false,
        })
    }
}

/// Debug view of a directory entry, without the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStatus {
    pub email: String,
    pub role: Role,
    pub attempts: u32,
    pub locked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_student() -> NewUser {
        NewUser {
            email: "John.Smith@Boolean.edu".to_string(),
            secret: "student123".to_string(),
            role: Role::Student,
            display_name: "John Smith".to_string(),
        }
    }

    #[test]
    fn test_record_from_new_user() {
        let record = UserRecord::try_from(new_student()).unwrap();

        assert_eq!(record.email, "john.smith@boolean.edu");
        assert!(record.secret_hash.starts_with("$argon2id$"));
        assert_eq!(record.failed_attempts, 0);
        assert!(!record.locked);
        assert_eq!(record.state(), AccountState::Active);
    }

    #[test]
    fn test_secret_matching_is_exact() {
        let record = UserRecord::try_from(new_student()).unwrap();

        assert!(record.secret_matches("student123"));
        assert!(!record.secret_matches("Student123"));
        assert!(!record.secret_matches("student123 "));
        assert!(!record.secret_matches(""));
    }

    #[test]
    fn test_locked_state() {
        let mut record = UserRecord::try_from(new_student()).unwrap();
        record.locked = true;
        assert_eq!(record.state(), AccountState::Locked);
    }

    #[test]
    fn test_landing_paths() {
        assert_eq!(Role::Student.landing_path(), "/dashboard/student");
        assert_eq!(Role::Faculty.landing_path(), "/dashboard/faculty");
        assert_eq!(Role::Administrator.landing_path(), "/dashboard/admin");
    }

    #[test]
    fn test_status_hides_secret() {
        let record = UserRecord::try_from(new_student()).unwrap();
        let json = serde_json::to_value(record.status()).unwrap();

        assert_eq!(json["email"], "john.smith@boolean.edu");
        assert_eq!(json["role"], "Student");
        assert_eq!(json["attempts"], 0);
        assert!(json.get("secret_hash").is_none());
    }
}
