//! Service context - dependency container for services
//!
//! Holds the repositories, the caller authenticator and the maintenance
//! credential needed by services.

use std::sync::Arc;

use social_common::auth::Authenticator;
use social_core::traits::{PostRepository, ReactionRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    reaction_repo: Arc<dyn ReactionRepository>,
    post_repo: Arc<dyn PostRepository>,

    // Authentication
    authenticator: Arc<dyn Authenticator>,
    service_token: Option<Arc<str>>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        post_repo: Arc<dyn PostRepository>,
        authenticator: Arc<dyn Authenticator>,
        service_token: Option<String>,
    ) -> Self {
        Self {
            reaction_repo,
            post_repo,
            authenticator,
            service_token: service_token.map(Arc::from),
        }
    }

    // === Repositories ===

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    // === Authentication ===

    /// Get the caller authenticator
    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    /// Token required on maintenance endpoints, if any
    pub fn service_token(&self) -> Option<&str> {
        self.service_token.as_deref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("authenticator", &"dyn Authenticator")
            .field("service_token", &self.service_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    authenticator: Option<Arc<dyn Authenticator>>,
    service_token: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Require this token on maintenance endpoints; `None` leaves them open
    pub fn service_token(mut self, token: Option<String>) -> Self {
        self.service_token = token;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.authenticator
                .ok_or_else(|| ServiceError::validation("authenticator is required"))?,
            self.service_token,
        ))
    }
}
