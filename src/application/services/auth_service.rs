//! Authentication service: credential check and attempt/lockout state machine.

use chrono::Utc;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::entities::{AccountState, LoginAttempt, SessionRecord, UserStatus};
use crate::domain::repositories::UserRepository;
use crate::error::{AuthError, StoreError};
use crate::utils::email::{check_credentials, normalize_email};

/// Number of consecutive wrong secrets that locks an account.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Tunables for [`AuthService`].
#[derive(Debug, Clone, Copy)]
pub struct LoginPolicy {
    pub max_attempts: u32,
    /// Pause between input validation and credential matching. Purely
    /// cosmetic; `Duration::ZERO` disables it.
    pub latency: Duration,
}

impl Default for LoginPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            latency: Duration::ZERO,
        }
    }
}

/// Service that authenticates email/secret pairs against the user directory.
///
/// Per account the state is `Active` while `failed_attempts < max_attempts`
/// and `Locked` once the limit is reached. `Locked` is terminal until
/// [`AuthService::reset_all_attempts`] is called.
///
/// Attempts are processed one at a time, so the read-modify-write on a
/// directory entry never interleaves.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    policy: LoginPolicy,
    attempt_gate: Mutex<()>,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repository: Arc<R>, policy: LoginPolicy) -> Self {
        Self {
            repository,
            policy,
            attempt_gate: Mutex::new(()),
        }
    }

    pub fn policy(&self) -> LoginPolicy {
        self.policy
    }

    /// Authenticates a login attempt.
    ///
    /// The identifier is trimmed and lowercased before validation and lookup.
    ///
    /// On success the account's failure counter is reset and a
    /// [`SessionRecord`] stamped with the current time is returned.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidInput`] if either field is empty or the email is
    ///   malformed; no record is touched
    /// - [`AuthError::NotFound`] if no account has this email
    /// - [`AuthError::WrongSecret`] with the attempts left before lockout
    /// - [`AuthError::Locked`] if the account is locked, including the attempt
    ///   that locks it; the counter is not incremented once locked
    /// - [`AuthError::Store`] if the directory cannot be read or written
    pub async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<SessionRecord, AuthError> {
        self.attempt(identifier, secret, None).await
    }

    /// Same as [`AuthService::authenticate`], recording the client address in
    /// the attempt log.
    pub async fn authenticate_from(
        &self,
        identifier: &str,
        secret: &str,
        client: IpAddr,
    ) -> Result<SessionRecord, AuthError> {
        self.attempt(identifier, secret, Some(client)).await
    }

    async fn attempt(
        &self,
        identifier: &str,
        secret: &str,
        client: Option<IpAddr>,
    ) -> Result<SessionRecord, AuthError> {
        let email = normalize_email(identifier);
        check_credentials(&email, secret).map_err(|problem| {
            record_outcome("invalid_input");
            AuthError::InvalidInput(problem)
        })?;

        if !self.policy.latency.is_zero() {
            tokio::time::sleep(self.policy.latency).await;
        }

        let _gate = self.attempt_gate.lock().await;

        let Some(mut user) = self.repository.find_by_email(&email).await? else {
            LoginAttempt::new(&email, false, "User not found", client).emit();
            record_outcome("not_found");
            return Err(AuthError::NotFound);
        };

        if user.state() == AccountState::Locked {
            LoginAttempt::new(&email, false, "Account locked", client).emit();
            record_outcome("locked");
            return Err(AuthError::Locked);
        }

        if user.secret_matches(secret) {
            user.failed_attempts = 0;
            self.repository.save(&user).await?;

            LoginAttempt::new(&email, true, "Successful login", client).emit();
            record_outcome("success");
            return Ok(SessionRecord::for_user(&user, Utc::now()));
        }

        user.failed_attempts += 1;
        if user.failed_attempts >= self.policy.max_attempts {
            user.locked = true;
            self.repository.save(&user).await?;

            LoginAttempt::new(&email, false, "Account locked after max attempts", client).emit();
            record_outcome("locked");
            return Err(AuthError::Locked);
        }

        self.repository.save(&user).await?;

        let remaining = self.policy.max_attempts - user.failed_attempts;
        LoginAttempt::new(
            &email,
            false,
            format!(
                "Failed attempt {}/{}",
                user.failed_attempts, self.policy.max_attempts
            ),
            client,
        )
        .emit();
        record_outcome("wrong_secret");
        Err(AuthError::WrongSecret { remaining })
    }

    /// Clears every failure counter and lock flag.
    ///
    /// Returns the number of records that changed.
    pub async fn reset_all_attempts(&self) -> Result<usize, StoreError> {
        let _gate = self.attempt_gate.lock().await;

        let mut reset = 0;
        for mut user in self.repository.list().await? {
            if user.failed_attempts == 0 && !user.locked {
                continue;
            }
            user.failed_attempts = 0;
            user.locked = false;
            self.repository.save(&user).await?;
            reset += 1;
        }

        tracing::info!(reset, "All user attempts reset");
        Ok(reset)
    }

    /// Attempt counters and lock flags of every account.
    pub async fn user_status(&self) -> Result<Vec<UserStatus>, StoreError> {
        Ok(self
            .repository
            .list()
            .await?
            .iter()
            .map(|user| user.status())
            .collect())
    }
}

fn record_outcome(outcome: &'static str) {
    metrics::counter!("portal_login_attempts_total", "outcome" => outcome).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewUser, Role, UserRecord};
    use crate::domain::repositories::MockUserRepository;
    use crate::error::InputProblem;
    use crate::infrastructure::memory::InMemoryUserRepository;

    const JOHN: &str = "john.smith@boolean.edu";

    fn service() -> AuthService<InMemoryUserRepository> {
        AuthService::new(
            Arc::new(InMemoryUserRepository::with_demo_users().unwrap()),
            LoginPolicy::default(),
        )
    }

    fn john_record(failed_attempts: u32, locked: bool) -> UserRecord {
        let mut record = UserRecord::try_from(NewUser {
            email: JOHN.to_string(),
            secret: "student123".to_string(),
            role: Role::Student,
            display_name: "John Smith".to_string(),
        })
        .unwrap();
        record.failed_attempts = failed_attempts;
        record.locked = locked;
        record
    }

    async fn status_of(service: &AuthService<InMemoryUserRepository>, email: &str) -> UserStatus {
        service
            .user_status()
            .await
            .unwrap()
            .into_iter()
            .find(|s| s.email == email)
            .unwrap()
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = service();

        let session = service.authenticate(JOHN, "student123").await.unwrap();

        assert_eq!(session.email, JOHN);
        assert_eq!(session.role, Role::Student);
        assert_eq!(session.display_name, "John Smith");
        assert_eq!(session.landing_path(), "/dashboard/student");
    }

    #[tokio::test]
    async fn test_identifier_is_case_insensitive() {
        let service = service();

        let session = service
            .authenticate("  John.Smith@Boolean.EDU ", "student123")
            .await
            .unwrap();

        assert_eq!(session.email, JOHN);
    }

    #[tokio::test]
    async fn test_wrong_secret_counts_down_then_locks() {
        let service = service();

        let first = service.authenticate(JOHN, "wrong").await.unwrap_err();
        assert!(matches!(first, AuthError::WrongSecret { remaining: 2 }));

        let second = service.authenticate(JOHN, "wrong").await.unwrap_err();
        assert!(matches!(second, AuthError::WrongSecret { remaining: 1 }));

        let third = service.authenticate(JOHN, "wrong").await.unwrap_err();
        assert!(matches!(third, AuthError::Locked));

        let status = status_of(&service, JOHN).await;
        assert!(status.locked);
        assert_eq!(status.attempts, 3);
    }

    #[tokio::test]
    async fn test_locked_account_rejects_correct_secret() {
        let service = service();
        for _ in 0..3 {
            let _ = service.authenticate(JOHN, "wrong").await;
        }

        let err = service.authenticate(JOHN, "student123").await.unwrap_err();
        assert!(matches!(err, AuthError::Locked));
        assert_eq!(err.user_message(), crate::error::LOCKED_MESSAGE);

        let _ = service.authenticate(JOHN, "wrong").await;
        assert_eq!(status_of(&service, JOHN).await.attempts, 3);
    }

    #[tokio::test]
    async fn test_success_resets_counter() {
        let service = service();
        let _ = service.authenticate(JOHN, "wrong").await;
        let _ = service.authenticate(JOHN, "wrong").await;
        assert_eq!(status_of(&service, JOHN).await.attempts, 2);

        service.authenticate(JOHN, "student123").await.unwrap();
        assert_eq!(status_of(&service, JOHN).await.attempts, 0);

        let err = service.authenticate(JOHN, "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::WrongSecret { remaining: 2 }));
    }

    #[tokio::test]
    async fn test_malformed_email_touches_nothing() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().never();
        mock_repo.expect_save().never();

        let service = AuthService::new(Arc::new(mock_repo), LoginPolicy::default());

        let err = service.authenticate("bob", "student123").await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::InvalidInput(InputProblem::MalformedEmail)
        ));
    }

    #[tokio::test]
    async fn test_empty_fields_rejected_before_lookup() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().never();
        mock_repo.expect_save().never();

        let service = AuthService::new(Arc::new(mock_repo), LoginPolicy::default());

        let err = service.authenticate("", "student123").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(InputProblem::Missing)));

        let err = service.authenticate(JOHN, "").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(InputProblem::Missing)));

        let err = service.authenticate("   ", "student123").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(InputProblem::Missing)));
    }

    #[tokio::test]
    async fn test_unknown_email_matches_wrong_secret_message() {
        let service = service();

        let unknown = service
            .authenticate("nobody@boolean.edu", "whatever")
            .await
            .unwrap_err();
        let wrong = service.authenticate(JOHN, "wrong").await.unwrap_err();

        assert!(matches!(unknown, AuthError::NotFound));
        assert!(matches!(wrong, AuthError::WrongSecret { .. }));
        assert_eq!(unknown.user_message(), wrong.user_message());
    }

    #[tokio::test]
    async fn test_unknown_email_saves_nothing() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "nobody@boolean.edu")
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_save().never();

        let service = AuthService::new(Arc::new(mock_repo), LoginPolicy::default());

        let err = service
            .authenticate("nobody@boolean.edu", "x")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
    }

    #[tokio::test]
    async fn test_locked_record_is_not_saved() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(john_record(3, true))));
        mock_repo.expect_save().never();

        let service = AuthService::new(Arc::new(mock_repo), LoginPolicy::default());

        let err = service.authenticate(JOHN, "student123").await.unwrap_err();
        assert!(matches!(err, AuthError::Locked));
    }

    #[tokio::test]
    async fn test_lock_transition_saves_locked_record() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(john_record(2, false))));
        mock_repo
            .expect_save()
            .withf(|user| user.locked && user.failed_attempts == 3)
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), LoginPolicy::default());

        let err = service.authenticate(JOHN, "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::Locked));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .returning(|_| Err(StoreError::Unavailable("offline".into())));

        let service = AuthService::new(Arc::new(mock_repo), LoginPolicy::default());

        let err = service.authenticate(JOHN, "student123").await.unwrap_err();
        assert!(matches!(err, AuthError::Store(_)));
    }

    #[tokio::test]
    async fn test_custom_max_attempts() {
        let service = AuthService::new(
            Arc::new(InMemoryUserRepository::with_demo_users().unwrap()),
            LoginPolicy {
                max_attempts: 1,
                latency: Duration::ZERO,
            },
        );

        let err = service.authenticate(JOHN, "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::Locked));
    }

    #[tokio::test]
    async fn test_reset_all_attempts_unlocks() {
        let service = service();
        for _ in 0..3 {
            let _ = service.authenticate(JOHN, "wrong").await;
        }
        let _ = service
            .authenticate("sarah.johnson@boolean.edu", "wrong")
            .await;

        let reset = service.reset_all_attempts().await.unwrap();
        assert_eq!(reset, 2);

        assert!(service.authenticate(JOHN, "student123").await.is_ok());
        assert!(
            service
                .user_status()
                .await
                .unwrap()
                .iter()
                .all(|s| s.attempts == 0 && !s.locked)
        );
    }

    #[tokio::test]
    async fn test_every_demo_account_logs_in() {
        let service = service();

        for (email, secret, role) in [
            ("john.smith@boolean.edu", "student123", Role::Student),
            ("sarah.johnson@boolean.edu", "faculty123", Role::Faculty),
            ("michael.brown@boolean.edu", "admin123", Role::Administrator),
        ] {
            let session = service.authenticate(email, secret).await.unwrap();
            assert_eq!(session.role, role);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let service = AuthService::new(
            Arc::new(InMemoryUserRepository::with_demo_users().unwrap()),
            LoginPolicy {
                max_attempts: 3,
                latency: Duration::from_millis(1000),
            },
        );

        let started = tokio::time::Instant::now();
        service.authenticate(JOHN, "student123").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
