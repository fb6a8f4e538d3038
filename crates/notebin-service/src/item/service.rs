//! Item lifecycle operations — create, list, get, delete, sweep.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use notebin_core::config::share::ShareConfig;
use notebin_core::error::AppError;
use notebin_core::types::range::ListRange;
use notebin_database::repositories::ItemRepository;
use notebin_entity::item::{ItemWithOwner, NewItem};

use crate::context::RequestContext;

/// Full item representation returned to callers, including the derived
/// share URL and the owner's username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Unique item identifier.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Item body text.
    pub content: String,
    /// Shareable URL, derived from the configured base URL and the id.
    pub short_url: String,
    /// The owning user.
    pub user_id: i64,
    /// When the item expires (never, if absent).
    pub expiration_date: Option<DateTime<Utc>>,
    /// The owning user's login name.
    pub owner_username: String,
}

/// Handles item creation, reads, deletion, and the expiration sweep.
#[derive(Debug, Clone)]
pub struct ItemService {
    /// Item repository.
    item_repo: Arc<ItemRepository>,
    /// Share link configuration.
    share: ShareConfig,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(item_repo: Arc<ItemRepository>, share: ShareConfig) -> Self {
        Self { item_repo, share }
    }

    /// Creates a new item owned by the authenticated user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: NewItem,
    ) -> Result<ItemRecord, AppError> {
        let row = self.item_repo.create(ctx.user_id, &data).await?;

        info!(item_id = row.item.id, user_id = ctx.user_id, "Item created");

        Ok(self.to_record(row))
    }

    /// Lists items that have not expired, in insertion order.
    ///
    /// Public: no ownership filter is applied.
    pub async fn list(&self, range: &ListRange) -> Result<Vec<ItemRecord>, AppError> {
        let items = self.item_repo.list_active(Utc::now(), range).await?;
        Ok(items.into_iter().map(|i| self.to_record(i)).collect())
    }

    /// Fetches a single item by id.
    ///
    /// Expired items are still returned here until the sweeper removes
    /// them; only the listing filters on expiration.
    pub async fn get(&self, id: i64) -> Result<ItemRecord, AppError> {
        let item = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))?;

        Ok(self.to_record(item))
    }

    /// Deletes an item owned by the authenticated user.
    ///
    /// A nonexistent item and a not-owned item produce the same not-found
    /// error so that callers cannot probe for existence.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), AppError> {
        let deleted = self.item_repo.delete_owned(id, ctx.user_id).await?;
        if !deleted {
            return Err(AppError::not_found("Item not found"));
        }

        info!(item_id = id, user_id = ctx.user_id, "Item deleted");
        Ok(())
    }

    fn to_record(&self, row: ItemWithOwner) -> ItemRecord {
        let short_url = row.share_url(&self.share.base_url);
        ItemRecord {
            id: row.item.id,
            title: row.item.title,
            content: row.item.content,
            short_url,
            user_id: row.item.user_id,
            expiration_date: row.item.expiration_date,
            owner_username: row.owner_username,
        }
    }
}
