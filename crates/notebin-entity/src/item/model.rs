//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A shared note item.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Item body text.
    pub content: String,
    /// The owning user.
    pub user_id: i64,
    /// When the item expires (never, if absent).
    pub expiration_date: Option<DateTime<Utc>>,
}

impl Item {
    /// Check whether the item has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expiration_date {
            Some(expiration) => expiration <= now,
            None => false,
        }
    }

    /// Build the shareable URL for this item.
    ///
    /// Derived from the configured base URL on every read, never stored.
    pub fn share_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.id)
    }
}

/// An item row joined with its owner's username.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItemWithOwner {
    /// The item row.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: Item,
    /// The owning user's login name.
    pub owner_username: String,
}

impl ItemWithOwner {
    /// Build the shareable URL for this item.
    pub fn share_url(&self, base_url: &str) -> String {
        self.item.share_url(base_url)
    }
}

/// Data required to create a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    /// Item title.
    pub title: String,
    /// Item body text.
    pub content: String,
    /// Optional expiration timestamp.
    pub expiration_date: Option<DateTime<Utc>>,
}
