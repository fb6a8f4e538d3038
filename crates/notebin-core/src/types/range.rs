//! Offset/limit range for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of items returned by a listing.
const DEFAULT_LIMIT: u64 = 10;
/// Maximum number of items returned by a listing.
const MAX_LIMIT: u64 = 100;

/// Request parameters for offset/limit list queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRange {
    /// Number of items to skip from the start of the listing.
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of items to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl ListRange {
    /// Create a new range, clamping the limit to the allowed maximum.
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        self.skip as i64
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_LIMIT) as i64
    }
}

impl Default for ListRange {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}
