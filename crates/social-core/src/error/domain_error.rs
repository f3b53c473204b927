//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{PostId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction type: {0}")]
    InvalidReactionKind(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists for user {user_id} on post {post_id}")]
    ReactionConflict { post_id: PostId, user_id: UserId },

    // =========================================================================
    // Data Integrity
    // =========================================================================
    #[error("Stored reaction has unrecognized value: {0}")]
    UnknownStoredReaction(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_TYPE",
            Self::ReactionConflict { .. } => "REACTION_CONFLICT",
            Self::UnknownStoredReaction(_) => "CORRUPT_REACTION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidReactionKind(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionConflict { .. })
    }
}
