//! Expiry service
//!
//! Deletes posts whose expiration has passed, along with their reactions.

use chrono::{DateTime, Utc};
use social_core::traits::SweepReport;
use tracing::{info, instrument};

use crate::dto::CleanupResponse;

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Expiry service
pub struct ExpiryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExpiryService<'a> {
    /// Create a new ExpiryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle a cleanup request from the scheduler
    #[instrument(skip(self, token))]
    pub async fn cleanup(&self, token: Option<&str>) -> ServiceResult<CleanupResponse> {
        AuthService::new(self.ctx).authorize_service(token)?;
        let report = self.sweep_expired(Utc::now()).await?;
        Ok(CleanupResponse::from(report))
    }

    /// Delete every post with `expires_at < now`
    #[instrument(skip(self))]
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> ServiceResult<SweepReport> {
        let report = self.ctx.post_repo().delete_expired(now).await?;

        info!(
            cutoff = %now,
            posts_deleted = report.posts_deleted,
            reactions_deleted = report.reactions_deleted,
            "Expiry sweep finished"
        );

        Ok(report)
    }
}
