//! Database models - SQLx-compatible structs for PostgreSQL tables

mod post;
mod reaction;

pub use post::{PostCountsModel, PostModel};
pub use reaction::ReactionModel;
