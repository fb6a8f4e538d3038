//! Offset/limit query parameter extractor.

use serde::{Deserialize, Serialize};

use notebin_core::types::range::ListRange;

/// Query parameters for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Items to skip (default: 0).
    #[serde(default)]
    pub skip: u64,
    /// Maximum items to return (default: 10, max: 100).
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

impl ListParams {
    /// Converts to a `ListRange`, clamping the limit.
    pub fn into_range(self) -> ListRange {
        ListRange::new(self.skip, self.limit)
    }
}
