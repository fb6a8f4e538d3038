//! Scheduled background tasks for Notebin.
//!
//! This crate provides:
//! - A cron scheduler for periodic maintenance tasks
//! - The expiration sweeper that garbage-collects expired items

pub mod jobs;
pub mod scheduler;

pub use jobs::ScheduledJob;
pub use scheduler::CronScheduler;
