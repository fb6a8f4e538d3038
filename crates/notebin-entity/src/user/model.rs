//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user in the Notebin system.
///
/// The username is the immutable identity key; user records are created
/// at registration and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub hashed_password: String,
}
