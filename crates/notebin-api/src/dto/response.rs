//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notebin_service::item::ItemRecord;

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Issued bearer token response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed bearer token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

impl TokenResponse {
    /// Creates a bearer token response.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Subject of a verified token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSubjectResponse {
    /// The username the token was issued for.
    pub username: String,
}

/// Full item representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    /// Unique item identifier.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Item body text.
    pub content: String,
    /// Derived shareable URL.
    pub short_url: String,
    /// The owning user.
    pub user_id: i64,
    /// When the item expires (never, if absent).
    pub expiration_date: Option<DateTime<Utc>>,
    /// The owning user's login name.
    pub owner_username: String,
}

impl From<ItemRecord> for ItemResponse {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            short_url: record.short_url,
            user_id: record.user_id,
            expiration_date: record.expiration_date,
            owner_username: record.owner_username,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
