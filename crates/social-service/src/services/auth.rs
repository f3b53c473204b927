//! Authentication service
//!
//! Resolves the caller of a request: end users by their bearer token, and
//! the maintenance caller by the configured service token.

use social_common::AppError;
use social_core::UserId;
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the bearer token of an end-user request to its user id
    ///
    /// # Errors
    /// `MissingAuth` when no token was sent, `InvalidToken`/`TokenExpired`
    /// when it does not identify a user, `ExternalService` when the identity
    /// backend is unreachable
    #[instrument(skip_all)]
    pub async fn authenticate_user(&self, token: Option<&str>) -> ServiceResult<UserId> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingAuth)?;

        let user_id = self.ctx.authenticator().authenticate(token).await.map_err(|e| {
            if e.is_unauthorized() {
                debug!(error = %e, "Bearer token rejected");
            } else {
                warn!(error = %e, "Identity lookup failed");
            }
            e
        })?;

        Ok(user_id)
    }

    /// Check the service token of a maintenance request
    ///
    /// Passes unconditionally when no service token is configured.
    #[instrument(skip_all)]
    pub fn authorize_service(&self, token: Option<&str>) -> ServiceResult<()> {
        let Some(expected) = self.ctx.service_token() else {
            return Ok(());
        };

        match token.map(str::trim) {
            None | Some("") => Err(AppError::MissingAuth.into()),
            Some(presented) if constant_time_eq(presented.as_bytes(), expected.as_bytes()) => {
                Ok(())
            }
            Some(_) => {
                warn!("Maintenance call with wrong service token");
                Err(AppError::InvalidToken.into())
            }
        }
    }
}

/// Compare two secrets without short-circuiting on the first mismatch
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
