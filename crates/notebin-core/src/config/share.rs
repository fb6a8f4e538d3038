//! Share link configuration.

use serde::{Deserialize, Serialize};

/// Configuration for derived item share URLs.
///
/// The short URL is computed from this base plus the item id on every
/// read; it is never persisted, so changing the base URL never leaves
/// stale links in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Base URL prepended to item ids when building share links.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}
