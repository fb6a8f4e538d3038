//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Credential exchange form body (`POST /token`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// Item creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    /// Item title.
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    /// Item body text.
    pub content: String,
    /// Optional expiration timestamp.
    pub expiration_date: Option<DateTime<Utc>>,
}
