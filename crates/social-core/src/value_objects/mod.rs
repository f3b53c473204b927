//! Value objects - immutable types that represent domain concepts

mod ids;
mod reaction_kind;

pub use ids::{IdParseError, PostId, ReactionId, UserId};
pub use reaction_kind::ReactionKind;
