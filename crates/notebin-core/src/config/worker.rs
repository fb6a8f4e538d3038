//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background sweeper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the background worker is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Six-field cron expression for the expiration sweep (default: hourly).
    #[serde(default = "default_sweep_schedule")]
    pub sweep_schedule: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            sweep_schedule: default_sweep_schedule(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sweep_schedule() -> String {
    "0 0 * * * *".to_string()
}
