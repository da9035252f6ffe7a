//! Signup and login operations for users and admins.
//!
//! Each operation runs as one linear sequence: validate, look up, hash or
//! verify, then persist or return the matched account. The first failing step
//! ends the operation with an error.

use tracing::{error, info, warn};

use super::password::{hash_password_blocking, verify_password_blocking};
use super::validation::{
    AdminLoginRequest, AdminSignupRequest, UserLoginRequest, UserSignupRequest,
};
use crate::db::{AccountRepository, Admin, NewAdmin, NewUser, User};
use crate::{ClubAuthError, Result};

/// Uniform message for every failed user login.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Uniform message for every failed admin login.
pub const INVALID_ADMIN_CREDENTIALS: &str = "Invalid admin credentials";

const USERNAME_TAKEN: &str = "Username already exists";
const ADMIN_USERNAME_TAKEN: &str = "Admin username already exists";

/// Register a user and return the new user ID.
///
/// Fails with `Validation`, `Conflict` when the username is taken, or
/// `Internal`/`Database` when the store misbehaves.
pub async fn signup_user(repo: &dyn AccountRepository, request: UserSignupRequest) -> Result<i64> {
    let signup = request.validate()?;

    if repo.find_user_by_username(&signup.username).await?.is_some() {
        return Err(ClubAuthError::Conflict(USERNAME_TAKEN.to_string()));
    }

    let password_hash = hash_password_blocking(signup.password).await?;
    let new_user = NewUser::new(signup.username, signup.course, signup.year, password_hash);

    match repo.insert_user(&new_user).await {
        Ok(id) => {
            info!(user_id = id, username = %new_user.username, "User account created");
            Ok(id)
        }
        Err(ClubAuthError::Conflict(_)) => Err(ClubAuthError::Conflict(USERNAME_TAKEN.to_string())),
        Err(e) => {
            error!(error = %e, "Failed to insert user");
            Err(ClubAuthError::Internal("Failed to create account".to_string()))
        }
    }
}

/// Authenticate a user by username, course, year and password.
///
/// An unknown tuple and a wrong password fail identically.
pub async fn login_user(repo: &dyn AccountRepository, request: UserLoginRequest) -> Result<User> {
    let login = request.validate()?;

    let Some(user) = repo
        .find_user_by_credentials(&login.username, &login.course, &login.year)
        .await?
    else {
        warn!(username = %login.username, "User login failed: no matching account");
        return Err(ClubAuthError::Authentication(INVALID_CREDENTIALS.to_string()));
    };

    if !verify_password_blocking(login.password, user.password_hash.clone()).await? {
        warn!(username = %login.username, "User login failed: wrong password");
        return Err(ClubAuthError::Authentication(INVALID_CREDENTIALS.to_string()));
    }

    info!(user_id = user.id, username = %user.username, "User logged in");
    Ok(user)
}

/// Register an admin and return the new admin ID.
pub async fn signup_admin(
    repo: &dyn AccountRepository,
    request: AdminSignupRequest,
) -> Result<i64> {
    let signup = request.validate()?;

    if repo
        .find_admin_by_username(&signup.admin_username)
        .await?
        .is_some()
    {
        return Err(ClubAuthError::Conflict(ADMIN_USERNAME_TAKEN.to_string()));
    }

    let password_hash = hash_password_blocking(signup.password).await?;
    let new_admin = NewAdmin::new(signup.admin_username, password_hash, signup.role, signup.club);

    match repo.insert_admin(&new_admin).await {
        Ok(id) => {
            info!(
                admin_id = id,
                admin_username = %new_admin.admin_username,
                role = %new_admin.role,
                "Admin account created"
            );
            Ok(id)
        }
        Err(ClubAuthError::Conflict(_)) => {
            Err(ClubAuthError::Conflict(ADMIN_USERNAME_TAKEN.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Failed to insert admin");
            Err(ClubAuthError::Internal(
                "Failed to create admin account".to_string(),
            ))
        }
    }
}

/// Authenticate an admin by admin username, role, club and password.
///
/// The role is only a lookup key; no permission check is attached to it.
pub async fn login_admin(
    repo: &dyn AccountRepository,
    request: AdminLoginRequest,
) -> Result<Admin> {
    let login = request.validate()?;

    let Some(admin) = repo
        .find_admin_by_credentials(&login.admin_username, &login.role, &login.club)
        .await?
    else {
        warn!(admin_username = %login.admin_username, "Admin login failed: no matching account");
        return Err(ClubAuthError::Authentication(
            INVALID_ADMIN_CREDENTIALS.to_string(),
        ));
    };

    if !verify_password_blocking(login.password, admin.password_hash.clone()).await? {
        warn!(admin_username = %login.admin_username, "Admin login failed: wrong password");
        return Err(ClubAuthError::Authentication(
            INVALID_ADMIN_CREDENTIALS.to_string(),
        ));
    }

    info!(admin_id = admin.id, admin_username = %admin.admin_username, "Admin logged in");
    Ok(admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::async_trait;

    use crate::auth::verify_password;
    use crate::db::{AdminRole, Database, SqliteAccountRepository};

    async fn setup() -> SqliteAccountRepository {
        let db = Database::open_in_memory().await.unwrap();
        SqliteAccountRepository::new(db.pool().clone())
    }

    fn user_signup(username: &str, password: &str) -> UserSignupRequest {
        UserSignupRequest {
            username: Some(username.to_string()),
            course: Some("CS".to_string()),
            year: Some("2".to_string()),
            password: Some(password.to_string()),
            confirm_password: Some(password.to_string()),
        }
    }

    fn user_login(username: &str, course: &str, year: &str, password: &str) -> UserLoginRequest {
        UserLoginRequest {
            username: Some(username.to_string()),
            course: Some(course.to_string()),
            year: Some(year.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn admin_signup(username: &str, role: &str, club: &str) -> AdminSignupRequest {
        AdminSignupRequest {
            admin_username: Some(username.to_string()),
            admin_password: Some("secret1".to_string()),
            role: Some(role.to_string()),
            club: Some(club.to_string()),
        }
    }

    fn admin_login(username: &str, role: &str, club: &str, password: &str) -> AdminLoginRequest {
        AdminLoginRequest {
            admin_username: Some(username.to_string()),
            admin_password: Some(password.to_string()),
            role: Some(role.to_string()),
            club: Some(club.to_string()),
        }
    }

    /// Store double whose every call fails, counting inserts.
    #[derive(Default)]
    struct FailingRepository {
        inserts: AtomicUsize,
    }

    #[async_trait]
    impl AccountRepository for FailingRepository {
        async fn find_user_by_username(&self, _: &str) -> Result<Option<User>> {
            Err(ClubAuthError::Database("store unavailable".to_string()))
        }

        async fn find_user_by_credentials(&self, _: &str, _: &str, _: &str) -> Result<Option<User>> {
            Err(ClubAuthError::Database("store unavailable".to_string()))
        }

        async fn find_admin_by_username(&self, _: &str) -> Result<Option<Admin>> {
            Err(ClubAuthError::Database("store unavailable".to_string()))
        }

        async fn find_admin_by_credentials(
            &self,
            _: &str,
            _: &str,
            _: &str,
        ) -> Result<Option<Admin>> {
            Err(ClubAuthError::Database("store unavailable".to_string()))
        }

        async fn insert_user(&self, _: &NewUser) -> Result<i64> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Err(ClubAuthError::Database("store unavailable".to_string()))
        }

        async fn insert_admin(&self, _: &NewAdmin) -> Result<i64> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Err(ClubAuthError::Database("store unavailable".to_string()))
        }
    }

    /// Store double that finds nothing and fails every insert.
    struct BrokenInsertRepository;

    #[async_trait]
    impl AccountRepository for BrokenInsertRepository {
        async fn find_user_by_username(&self, _: &str) -> Result<Option<User>> {
            Ok(None)
        }

        async fn find_user_by_credentials(&self, _: &str, _: &str, _: &str) -> Result<Option<User>> {
            Ok(None)
        }

        async fn find_admin_by_username(&self, _: &str) -> Result<Option<Admin>> {
            Ok(None)
        }

        async fn find_admin_by_credentials(
            &self,
            _: &str,
            _: &str,
            _: &str,
        ) -> Result<Option<Admin>> {
            Ok(None)
        }

        async fn insert_user(&self, _: &NewUser) -> Result<i64> {
            Err(ClubAuthError::Database("disk full".to_string()))
        }

        async fn insert_admin(&self, _: &NewAdmin) -> Result<i64> {
            Err(ClubAuthError::Database("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn test_signup_stores_verifiable_hash() {
        let repo = setup().await;

        let id = signup_user(&repo, user_signup("alice", "secret1"))
            .await
            .unwrap();

        let user = repo.find_user_by_username("alice").await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_ne!(user.password_hash, "secret1");
        assert!(verify_password("secret1", &user.password_hash).unwrap());
        assert!(!verify_password("secret2", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_signup_duplicate_is_conflict() {
        let repo = setup().await;
        signup_user(&repo, user_signup("alice", "secret1"))
            .await
            .unwrap();

        let err = signup_user(&repo, user_signup("alice", "another1"))
            .await
            .unwrap_err();
        match err {
            ClubAuthError::Conflict(msg) => assert_eq!(msg, "Username already exists"),
            other => panic!("expected conflict, got {other:?}"),
        }

        let user = repo.find_user_by_username("alice").await.unwrap().unwrap();
        assert!(verify_password("secret1", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_signup_validation_runs_before_store() {
        let repo = FailingRepository::default();
        let mut req = user_signup("alice", "secret1");
        req.confirm_password = Some("secret2".to_string());

        let err = signup_user(&repo, req).await.unwrap_err();
        assert!(matches!(err, ClubAuthError::Validation(ref m) if m == "Passwords do not match"));
    }

    #[tokio::test]
    async fn test_signup_store_failure_skips_insert() {
        let repo = FailingRepository::default();

        let err = signup_user(&repo, user_signup("alice", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClubAuthError::Database(_)));
        assert_eq!(repo.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_signup_insert_failure_is_internal() {
        let err = signup_user(&BrokenInsertRepository, user_signup("alice", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClubAuthError::Internal(ref m) if m == "Failed to create account"));

        let err = signup_admin(&BrokenInsertRepository, admin_signup("boss", "lead", "Chess"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ClubAuthError::Internal(ref m) if m == "Failed to create admin account")
        );
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_signups() {
        let repo = Arc::new(setup().await);

        let (a, b) = tokio::join!(
            signup_user(repo.as_ref(), user_signup("racer", "secret1")),
            signup_user(repo.as_ref(), user_signup("racer", "secret2")),
        );

        let outcomes = [a, b];
        let created = outcomes.iter().filter(|r| r.is_ok()).count();
        let conflicts = outcomes
            .iter()
            .filter(|r| matches!(r, Err(ClubAuthError::Conflict(_))))
            .count();
        assert_eq!(created, 1);
        assert_eq!(conflicts, 1);
    }

    #[tokio::test]
    async fn test_login_success() {
        let repo = setup().await;
        let id = signup_user(&repo, user_signup("alice", "secret1"))
            .await
            .unwrap();

        let user = login_user(&repo, user_login("alice", "CS", "2", "secret1"))
            .await
            .unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.course, "CS");
        assert_eq!(user.year, "2");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let repo = setup().await;
        signup_user(&repo, user_signup("alice", "secret1"))
            .await
            .unwrap();

        let attempts = [
            user_login("nobody", "CS", "2", "secret1"),
            user_login("alice", "Math", "2", "secret1"),
            user_login("alice", "CS", "3", "secret1"),
            user_login("alice", "CS", "2", "wrong"),
        ];

        for attempt in attempts {
            let err = login_user(&repo, attempt).await.unwrap_err();
            match err {
                ClubAuthError::Authentication(msg) => assert_eq!(msg, INVALID_CREDENTIALS),
                other => panic!("expected authentication error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_login_store_failure() {
        let err = login_user(
            &FailingRepository::default(),
            user_login("alice", "CS", "2", "secret1"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ClubAuthError::Database(_)));
    }

    #[tokio::test]
    async fn test_admin_signup_and_login() {
        let repo = setup().await;
        signup_admin(&repo, admin_signup("boss", "president", "Chess"))
            .await
            .unwrap();

        let admin = login_admin(&repo, admin_login("boss", "president", "Chess", "secret1"))
            .await
            .unwrap();
        assert_eq!(admin.admin_username, "boss");
        assert_eq!(admin.role, AdminRole::President);
        assert_eq!(admin.club, "Chess");
    }

    #[tokio::test]
    async fn test_admin_signup_duplicate_is_conflict() {
        let repo = setup().await;
        signup_admin(&repo, admin_signup("boss", "lead", "Chess"))
            .await
            .unwrap();

        let err = signup_admin(&repo, admin_signup("boss", "president", "Drama"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ClubAuthError::Conflict(ref m) if m == "Admin username already exists")
        );
    }

    #[tokio::test]
    async fn test_admin_login_failures_are_indistinguishable() {
        let repo = setup().await;
        signup_admin(&repo, admin_signup("boss", "lead", "Chess"))
            .await
            .unwrap();

        let attempts = [
            admin_login("nobody", "lead", "Chess", "secret1"),
            admin_login("boss", "president", "Chess", "secret1"),
            admin_login("boss", "lead", "Drama", "secret1"),
            admin_login("boss", "emperor", "Chess", "secret1"),
            admin_login("boss", "lead", "Chess", "wrong-password"),
        ];

        for attempt in attempts {
            let err = login_admin(&repo, attempt).await.unwrap_err();
            assert!(
                matches!(err, ClubAuthError::Authentication(ref m) if m == INVALID_ADMIN_CREDENTIALS)
            );
        }
    }
}
