//! Reaction service
//!
//! Applies a user's reaction to a post: validates the request, resolves the
//! caller, then hands the typed command to the ledger repository.

use social_core::ledger::{ReactionCommand, ReactionOutcome};
use tracing::{info, instrument};

use crate::dto::{ApplyReactionRequest, ReactionResponse};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle a reaction request from an end user
    ///
    /// The body is validated before the token is looked at, and the token is
    /// resolved before any row is touched.
    #[instrument(skip(self, token))]
    pub async fn apply_reaction(
        &self,
        request: &ApplyReactionRequest,
        token: Option<&str>,
    ) -> ServiceResult<ReactionResponse> {
        let input = request.parse()?;
        let user_id = AuthService::new(self.ctx).authenticate_user(token).await?;

        let outcome = self.apply(&input.into_command(user_id)).await?;
        Ok(ReactionResponse::from(outcome))
    }

    /// Apply a command for an already authenticated caller
    #[instrument(skip(self), fields(post_id = %command.post_id, user_id = %command.user_id))]
    pub async fn apply(&self, command: &ReactionCommand) -> ServiceResult<ReactionOutcome> {
        let outcome = self.ctx.reaction_repo().apply(command).await?;

        info!(
            post_id = %command.post_id,
            user_id = %command.user_id,
            kind = %command.kind,
            action = %outcome.action,
            "Reaction handled"
        );

        Ok(outcome)
    }
}
