//! Post entity - a shared post carrying per-kind reaction counters

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ledger::CounterDelta;
use crate::value_objects::{PostId, ReactionKind};

/// Denormalized reaction counters stored on the post row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReactionCounts {
    pub heart: i32,
    pub laugh: i32,
    pub hot: i32,
    pub broken_heart: i32,
}

impl ReactionCounts {
    /// Counter for a single kind
    pub fn get(&self, kind: ReactionKind) -> i32 {
        match kind {
            ReactionKind::Heart => self.heart,
            ReactionKind::Laugh => self.laugh,
            ReactionKind::Hot => self.hot,
            ReactionKind::BrokenHeart => self.broken_heart,
        }
    }

    fn slot(&mut self, kind: ReactionKind) -> &mut i32 {
        match kind {
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::Laugh => &mut self.laugh,
            ReactionKind::Hot => &mut self.hot,
            ReactionKind::BrokenHeart => &mut self.broken_heart,
        }
    }

    /// Apply a relative delta, flooring every counter at zero
    pub fn apply(&mut self, delta: &CounterDelta) {
        for kind in ReactionKind::ALL {
            let slot = self.slot(kind);
            *slot = slot.saturating_add(delta.get(kind)).max(0);
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub counts: ReactionCounts,
    /// `None` means the post never expires
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with zeroed counters
    pub fn new(id: PostId, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            counts: ReactionCounts::default(),
            expires_at,
            created_at: Utc::now(),
        }
    }

    /// A post is expired once its expiration is strictly earlier than `now`
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }
}
