//! Reaction entity - a single user's reaction on a post

use chrono::{DateTime, Utc};

use crate::value_objects::{PostId, ReactionId, ReactionKind, UserId};

/// Reaction entity
///
/// There is at most one reaction per (post, user) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: ReactionId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(post_id: PostId, user_id: UserId, kind: ReactionKind) -> Self {
        let now = Utc::now();
        Self {
            id: ReactionId::generate(),
            post_id,
            user_id,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if reaction is of a specific kind
    #[inline]
    pub fn is_kind(&self, kind: ReactionKind) -> bool {
        self.kind == kind
    }

    /// Switch to another kind
    pub fn switch_to(&mut self, kind: ReactionKind) {
        self.kind = kind;
        self.updated_at = Utc::now();
    }
}
