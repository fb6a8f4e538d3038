//! Scheduled job definitions.

pub mod expiration;

use async_trait::async_trait;
use serde_json::Value;

use notebin_core::error::AppError;

pub use expiration::ExpirationSweeper;

/// A periodic background task driven by the cron scheduler.
#[async_trait]
pub trait ScheduledJob: Send + Sync {
    /// Job name used in logs.
    fn name(&self) -> &str;

    /// Six-field cron expression for this job.
    fn schedule(&self) -> &str;

    /// Execute one run of the job, returning a summary of what was done.
    async fn run(&self) -> Result<Value, AppError>;
}
