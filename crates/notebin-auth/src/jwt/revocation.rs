//! In-memory token revocation set.

use dashmap::DashSet;

/// Process-wide set of tokens invalidated before their natural expiry.
///
/// Owned by whoever constructs it and injected where needed, never a
/// module-level singleton. Safe under concurrent `revoke` and `contains`
/// calls. Not persisted: a restart forgets all revocations, and revoked
/// tokens become unusable again only once their expiry passes. This
/// mirrors the reference design's in-memory blacklist and is an accepted
/// limitation, not an oversight.
#[derive(Debug, Default)]
pub struct RevocationSet {
    tokens: DashSet<String>,
}

impl RevocationSet {
    /// Creates an empty revocation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token to the set. Idempotent.
    pub fn revoke(&self, token: &str) {
        self.tokens.insert(token.to_string());
    }

    /// Checks whether a token has been revoked.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of revoked tokens currently held.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
