//! Cleanup handlers
//!
//! Maintenance endpoint invoked by the scheduler to delete expired posts.

use axum::{extract::State, Json};
use social_service::{CleanupResponse, ExpiryService};

use crate::extractors::BearerToken;
use crate::response::ApiResult;
use crate::state::AppState;

/// Delete every expired post and its reactions
///
/// POST /functions/cleanup-expired-posts
pub async fn cleanup_expired_posts(
    State(state): State<AppState>,
    token: BearerToken,
) -> ApiResult<Json<CleanupResponse>> {
    let service = ExpiryService::new(state.service_context());
    let response = service.cleanup(token.as_deref()).await?;
    Ok(Json(response))
}
