//! Item repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use notebin_core::error::{AppError, ErrorKind};
use notebin_core::result::AppResult;
use notebin_core::types::range::ListRange;
use notebin_entity::item::{ItemWithOwner, NewItem};

/// Repository for item persistence, listing, and deletion.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new item owned by `user_id`, returning the joined row.
    pub async fn create(&self, user_id: i64, data: &NewItem) -> AppResult<ItemWithOwner> {
        sqlx::query_as::<_, ItemWithOwner>(
            "WITH inserted AS ( \
                 INSERT INTO items (title, content, user_id, expiration_date) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING * \
             ) \
             SELECT i.id, i.title, i.content, i.user_id, i.expiration_date, \
                    u.username AS owner_username \
             FROM inserted i JOIN users u ON u.id = i.user_id",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(user_id)
        .bind(data.expiration_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    /// List items that have not expired as of `now`, in insertion order.
    ///
    /// Items with no expiration date are always included. No ownership
    /// filter; this backs the public listing.
    pub async fn list_active(
        &self,
        now: DateTime<Utc>,
        range: &ListRange,
    ) -> AppResult<Vec<ItemWithOwner>> {
        sqlx::query_as::<_, ItemWithOwner>(
            "SELECT i.id, i.title, i.content, i.user_id, i.expiration_date, \
                    u.username AS owner_username \
             FROM items i JOIN users u ON u.id = i.user_id \
             WHERE i.expiration_date IS NULL OR i.expiration_date > $1 \
             ORDER BY i.id \
             OFFSET $2 LIMIT $3",
        )
        .bind(now)
        .bind(range.offset())
        .bind(range.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    /// Find an item by primary key, regardless of expiration status.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<ItemWithOwner>> {
        sqlx::query_as::<_, ItemWithOwner>(
            "SELECT i.id, i.title, i.content, i.user_id, i.expiration_date, \
                    u.username AS owner_username \
             FROM items i JOIN users u ON u.id = i.user_id \
             WHERE i.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item by id", e))
    }

    /// Delete an item if it exists and is owned by `user_id`.
    ///
    /// Returns `true` when a row was deleted. The caller cannot distinguish
    /// a nonexistent item from a not-owned one.
    pub async fn delete_owned(&self, id: i64, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every item whose expiration date is at or before `now`.
    ///
    /// Single statement, so each sweep is all-or-nothing. Returns the
    /// number of rows removed.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM items WHERE expiration_date <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete expired items", e)
            })?;

        Ok(result.rows_affected())
    }
}
