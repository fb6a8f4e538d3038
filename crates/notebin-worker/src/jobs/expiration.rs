//! Expired-item sweep job.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::info;

use notebin_core::error::AppError;
use notebin_database::repositories::ItemRepository;

use super::ScheduledJob;

/// Deletes items whose expiration date has passed.
///
/// Each run issues a single atomic delete against the cutoff captured at
/// invocation, so a run removes exactly the set of items expired at that
/// instant and nothing else. A failed run leaves the store untouched and
/// the next scheduled run retries.
#[derive(Debug)]
pub struct ExpirationSweeper {
    /// Item repository.
    item_repo: Arc<ItemRepository>,
    /// Cron expression driving this job.
    schedule: String,
}

impl ExpirationSweeper {
    /// Create a new expiration sweeper.
    pub fn new(item_repo: Arc<ItemRepository>, schedule: String) -> Self {
        Self {
            item_repo,
            schedule,
        }
    }

    /// Run one sweep against the given cutoff, returning the removed count.
    pub async fn sweep(&self, now: chrono::DateTime<Utc>) -> Result<u64, AppError> {
        let removed = self.item_repo.delete_expired(now).await?;

        if removed > 0 {
            info!(removed, "Swept expired items");
        }

        Ok(removed)
    }
}

#[async_trait]
impl ScheduledJob for ExpirationSweeper {
    fn name(&self) -> &str {
        "expiration_sweep"
    }

    fn schedule(&self) -> &str {
        &self.schedule
    }

    async fn run(&self) -> Result<Value, AppError> {
        let removed = self.sweep(Utc::now()).await?;

        Ok(serde_json::json!({
            "task": "expiration_sweep",
            "expired_items_removed": removed,
        }))
    }
}
