//! # social-core
//!
//! Domain layer containing entities, value objects, the reaction ledger rules,
//! and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod ledger;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Post, Reaction, ReactionCounts};
pub use error::DomainError;
pub use ledger::{
    CounterDelta, ReactionAction, ReactionCommand, ReactionMode, ReactionOutcome,
    ReactionTransition, RowWrite,
};
pub use traits::{PostRepository, ReactionRepository, RepoResult, SweepReport};
pub use value_objects::{IdParseError, PostId, ReactionId, ReactionKind, UserId};
