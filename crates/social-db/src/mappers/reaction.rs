//! Reaction model -> entity mapper

use social_core::entities::Reaction;
use social_core::error::DomainError;
use social_core::value_objects::{PostId, ReactionId, ReactionKind, UserId};

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity, normalizing legacy emoji.
///
/// A value that is neither a symbolic kind nor a known emoji is corrupt data
/// and surfaces as `UnknownStoredReaction`.
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind = ReactionKind::from_stored(&model.reaction)
            .ok_or(DomainError::UnknownStoredReaction(model.reaction))?;

        Ok(Reaction {
            id: ReactionId::new(model.id),
            post_id: PostId::new(model.post_id),
            user_id: UserId::new(model.user_id),
            kind,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
