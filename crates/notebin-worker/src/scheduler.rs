//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use notebin_core::error::AppError;

use crate::jobs::ScheduledJob;

/// Cron-based scheduler for periodic background tasks.
pub struct CronScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler.
    pub async fn new() -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self { scheduler })
    }

    /// Register a job on its own cron schedule.
    ///
    /// A failing run is logged and swallowed; the scheduler task keeps
    /// running and retries on the next tick.
    pub async fn register(&self, job: Arc<dyn ScheduledJob>) -> Result<(), AppError> {
        let name = job.name().to_string();
        let schedule = job.schedule().to_string();

        let cron_job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                tracing::debug!(job = job.name(), "Running scheduled job");
                match job.run().await {
                    Ok(summary) => {
                        tracing::debug!(job = job.name(), %summary, "Scheduled job finished");
                    }
                    Err(e) => {
                        tracing::error!(
                            job = job.name(),
                            error = %e,
                            "Scheduled job failed; will retry on next run"
                        );
                    }
                }
            })
        })
        .map_err(|e| AppError::internal(format!("Failed to create '{name}' schedule: {e}")))?;

        self.scheduler
            .add(cron_job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add '{name}' schedule: {e}")))?;

        tracing::info!(job = %name, schedule = %schedule, "Registered scheduled job");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }
}
