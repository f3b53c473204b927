//! Reaction transitions
//!
//! Given the kind a user currently has on a post (if any) and the kind they
//! just picked, decide what happens to the reaction row and by how much each
//! counter column moves. Storage backends execute the plan; they never
//! decide it themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::ReactionCounts;
use crate::error::DomainError;
use crate::value_objects::{PostId, ReactionKind, UserId};

/// How a repeated pick of the same kind is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionMode {
    /// Same kind again removes the reaction
    #[default]
    Toggle,
    /// Same kind again leaves everything untouched
    Set,
}

impl FromStr for ReactionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => Ok(Self::Toggle),
            "set" => Ok(Self::Set),
            other => Err(DomainError::ValidationError(format!(
                "Invalid reaction mode: {other}"
            ))),
        }
    }
}

/// What the call did, as reported back to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionAction {
    Added,
    Removed,
    Changed,
    NoChange,
}

impl ReactionAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
            Self::NoChange => "no_change",
        }
    }
}

impl fmt::Display for ReactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write to perform on the (post, user) reaction row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowWrite {
    Insert(ReactionKind),
    Update(ReactionKind),
    Delete,
    Keep,
}

/// Relative change to apply to each counter column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterDelta {
    pub heart: i32,
    pub laugh: i32,
    pub hot: i32,
    pub broken_heart: i32,
}

impl CounterDelta {
    pub fn get(&self, kind: ReactionKind) -> i32 {
        match kind {
            ReactionKind::Heart => self.heart,
            ReactionKind::Laugh => self.laugh,
            ReactionKind::Hot => self.hot,
            ReactionKind::BrokenHeart => self.broken_heart,
        }
    }

    pub fn add(&mut self, kind: ReactionKind, amount: i32) {
        match kind {
            ReactionKind::Heart => self.heart += amount,
            ReactionKind::Laugh => self.laugh += amount,
            ReactionKind::Hot => self.hot += amount,
            ReactionKind::BrokenHeart => self.broken_heart += amount,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// A request to apply a reaction, with the caller already authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionCommand {
    pub post_id: PostId,
    pub user_id: UserId,
    pub kind: ReactionKind,
    pub mode: ReactionMode,
}

impl ReactionCommand {
    pub fn new(post_id: PostId, user_id: UserId, kind: ReactionKind) -> Self {
        Self {
            post_id,
            user_id,
            kind,
            mode: ReactionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ReactionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Planned effect of one `applyReaction` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionTransition {
    pub action: ReactionAction,
    pub previous: Option<ReactionKind>,
    pub current: Option<ReactionKind>,
    pub row: RowWrite,
    pub delta: CounterDelta,
}

impl ReactionTransition {
    /// Plan the transition from `existing` given the user's pick
    pub fn plan(
        existing: Option<ReactionKind>,
        requested: ReactionKind,
        mode: ReactionMode,
    ) -> Self {
        let mut delta = CounterDelta::default();

        let (action, current, row) = match existing {
            None => {
                delta.add(requested, 1);
                (ReactionAction::Added, Some(requested), RowWrite::Insert(requested))
            }
            Some(old) if old == requested => match mode {
                ReactionMode::Toggle => {
                    delta.add(old, -1);
                    (ReactionAction::Removed, None, RowWrite::Delete)
                }
                ReactionMode::Set => (ReactionAction::NoChange, Some(old), RowWrite::Keep),
            },
            Some(old) => {
                delta.add(old, -1);
                delta.add(requested, 1);
                (ReactionAction::Changed, Some(requested), RowWrite::Update(requested))
            }
        };

        Self {
            action,
            previous: existing,
            current,
            row,
            delta,
        }
    }

    /// Plan for a command
    pub fn for_command(existing: Option<ReactionKind>, command: &ReactionCommand) -> Self {
        Self::plan(existing, command.kind, command.mode)
    }
}

/// Result of applying a reaction, as committed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionOutcome {
    pub action: ReactionAction,
    pub kind: ReactionKind,
    pub previous: Option<ReactionKind>,
    pub current: Option<ReactionKind>,
    /// Post counters after the change
    pub counts: ReactionCounts,
}

impl ReactionOutcome {
    pub fn new(kind: ReactionKind, transition: &ReactionTransition, counts: ReactionCounts) -> Self {
        Self {
            action: transition.action,
            kind,
            previous: transition.previous,
            current: transition.current,
            counts,
        }
    }
}
