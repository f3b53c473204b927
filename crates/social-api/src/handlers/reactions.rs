//! Reaction handlers
//!
//! Endpoint for toggling or setting the caller's reaction on a post.

use axum::{extract::State, Json};
use social_service::{ApplyReactionRequest, ReactionResponse, ReactionService};

use crate::extractors::{BearerToken, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Apply a reaction for the authenticated caller
///
/// POST /functions/handle-reaction
pub async fn handle_reaction(
    State(state): State<AppState>,
    token: BearerToken,
    ValidatedJson(request): ValidatedJson<ApplyReactionRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.apply_reaction(&request, token.as_deref()).await?;
    Ok(Json(response))
}
