//! Reaction ledger rules
//!
//! Pure decision logic shared by every storage backend.

mod transition;

pub use transition::{
    CounterDelta, ReactionAction, ReactionCommand, ReactionMode, ReactionOutcome,
    ReactionTransition, RowWrite,
};
