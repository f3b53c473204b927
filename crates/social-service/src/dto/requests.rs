//! Request DTOs for API endpoints
//!
//! Request DTOs implement `Deserialize` and `Validate`. Every field is
//! optional at the serde level so that a missing field is reported as a
//! validation error rather than a JSON error.

use serde::Deserialize;
use social_core::ledger::{ReactionCommand, ReactionMode};
use social_core::{PostId, ReactionKind, UserId};
use validator::Validate;

use crate::services::{ServiceError, ServiceResult};

const MISSING_FIELDS: &str = "Missing postId or reactionType";

/// Body of `POST /functions/handle-reaction`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplyReactionRequest {
    #[validate(
        required(message = "Missing postId or reactionType"),
        length(min = 1, message = "Missing postId or reactionType")
    )]
    pub post_id: Option<String>,

    #[validate(
        required(message = "Missing postId or reactionType"),
        length(min = 1, message = "Missing postId or reactionType")
    )]
    pub reaction_type: Option<String>,

    /// `toggle` (default) or `set`
    pub mode: Option<String>,
}

/// Typed reaction input, ready to be bound to a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionInput {
    pub post_id: PostId,
    pub kind: ReactionKind,
    pub mode: ReactionMode,
}

impl ReactionInput {
    pub fn into_command(self, user_id: UserId) -> ReactionCommand {
        ReactionCommand::new(self.post_id, user_id, self.kind).with_mode(self.mode)
    }
}

impl ApplyReactionRequest {
    /// Validate the body and parse it into typed input
    ///
    /// # Errors
    /// `Validation` for missing fields or a malformed post id,
    /// `InvalidReactionKind` for a kind outside the fixed set
    pub fn parse(&self) -> ServiceResult<ReactionInput> {
        self.validate()
            .map_err(|_| ServiceError::validation(MISSING_FIELDS))?;

        let (Some(post_id), Some(reaction_type)) =
            (self.post_id.as_deref(), self.reaction_type.as_deref())
        else {
            return Err(ServiceError::validation(MISSING_FIELDS));
        };

        let post_id = PostId::parse(post_id)
            .map_err(|_| ServiceError::validation("postId must be a UUID"))?;
        let kind: ReactionKind = reaction_type.parse()?;
        let mode = match self.mode.as_deref() {
            Some(raw) => raw.parse()?,
            None => ReactionMode::default(),
        };

        Ok(ReactionInput {
            post_id,
            kind,
            mode,
        })
    }
}
