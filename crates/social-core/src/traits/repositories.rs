//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{Post, Reaction};
use crate::error::DomainError;
use crate::ledger::{ReactionCommand, ReactionOutcome};
use crate::value_objects::{PostId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Apply a reaction command atomically.
    ///
    /// Implementations must read the existing reaction, write the row and
    /// adjust the post counters as one unit, so that concurrent commands on
    /// the same post never lose an update.
    async fn apply(&self, command: &ReactionCommand) -> RepoResult<ReactionOutcome>;

    /// Find the caller's reaction on a post, with the kind normalized
    async fn find(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>>;

    /// Rewrite legacy emoji-valued rows to their symbolic kind.
    ///
    /// Returns the number of rows rewritten; running it again returns 0.
    async fn normalize_legacy(&self) -> RepoResult<u64>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Rows removed by one expiry sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SweepReport {
    pub posts_deleted: u64,
    pub reactions_deleted: u64,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by id, with its current counters
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Delete every post whose expiration is strictly earlier than `now`,
    /// together with its reactions
    async fn delete_expired(&self, now: DateTime<Utc>) -> RepoResult<SweepReport>;

    /// Cheap connectivity check for readiness probes
    async fn ping(&self) -> RepoResult<()>;
}
