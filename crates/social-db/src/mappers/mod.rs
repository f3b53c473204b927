//! Model to entity mappers
//!
//! Conversions from database rows (models) to domain objects (social-core).
//! Reaction rows go through `TryFrom` because a stored kind may be legacy or
//! unrecognized.

mod post;
mod reaction;
