//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};

/// Context for the current authenticated request.
///
/// Produced by the access control layer after token verification and
/// subject resolution, and passed into service methods so that every
/// operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
    /// The authenticated user's login name.
    pub username: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: i64, username: String) -> Self {
        Self { user_id, username }
    }
}
