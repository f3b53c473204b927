//! Domain entities - core business objects

mod post;
mod reaction;

pub use post::{Post, ReactionCounts};
pub use reaction::Reaction;
