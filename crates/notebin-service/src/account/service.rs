//! Account operations — registration and credential verification.

use std::sync::Arc;

use tracing::info;

use notebin_auth::password::PasswordHasher;
use notebin_core::error::AppError;
use notebin_database::repositories::UserRepository;
use notebin_entity::user::{CreateUser, User};

/// Handles account registration and credential checks.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Registers a new user.
    ///
    /// Fails with a duplicate-user error if the username is taken. The
    /// password is hashed before it ever reaches the repository; the
    /// plaintext is not stored or logged.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let hashed_password = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                hashed_password,
            })
            .await?;

        info!(username = %user.username, "User registered");

        Ok(user)
    }

    /// Verifies a username/password pair.
    ///
    /// Fails with not-found if no such user exists and with
    /// invalid-credentials if the hash comparison fails. Callers that must
    /// not leak user existence collapse the former into the latter.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

        let valid = self
            .hasher
            .verify_password(password, &user.hashed_password)?;
        if !valid {
            return Err(AppError::invalid_credentials("Incorrect username or password"));
        }

        Ok(user)
    }

    /// Resolves a token subject to a live user record.
    ///
    /// A token can outlive its account; a missing row is a not-found
    /// error, never a panic.
    pub async fn resolve_subject(&self, username: &str) -> Result<User, AppError> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
