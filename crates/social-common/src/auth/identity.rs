//! Caller identity resolution
//!
//! A bearer token is turned into the caller's user id by an [`Authenticator`].
//! Two implementations exist: local JWT verification with a shared secret,
//! and an exchange with the backend identity service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use social_core::UserId;
use tracing::{debug, instrument, warn};

use crate::config::{AppConfig, AuthMode};
use crate::error::{AppError, AppResult};

use super::jwt::JwtService;

/// Path of the identity service endpoint returning the session's user
pub const CURRENT_USER_PATH: &str = "/api/auth/sessions/current";

/// Resolves a bearer token to the caller's user id
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// # Errors
    /// `InvalidToken`/`TokenExpired` when the token does not identify a user,
    /// `ExternalService` when the identity backend cannot be reached at all
    async fn authenticate(&self, token: &str) -> AppResult<UserId>;
}

/// Verifies tokens locally with the shared HS256 secret
#[derive(Debug, Clone)]
pub struct JwtAuthenticator {
    jwt: JwtService,
}

impl JwtAuthenticator {
    pub fn new(jwt: JwtService) -> Self {
        Self { jwt }
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn authenticate(&self, token: &str) -> AppResult<UserId> {
        self.jwt.validate_access_token(token)
    }
}

#[derive(Debug, Deserialize)]
struct CurrentUserBody {
    user: Option<CurrentUser>,
}

#[derive(Debug, Deserialize)]
struct CurrentUser {
    id: Option<String>,
}

/// Exchanges the token with the backend identity service
#[derive(Debug, Clone)]
pub struct RemoteAuthenticator {
    client: reqwest::Client,
    current_user_url: String,
}

impl RemoteAuthenticator {
    /// Create an authenticator against `base_url`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            current_user_url: format!("{}{CURRENT_USER_PATH}", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl Authenticator for RemoteAuthenticator {
    #[instrument(skip_all)]
    async fn authenticate(&self, token: &str) -> AppResult<UserId> {
        let response = self
            .client
            .get(&self.current_user_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("identity service unreachable: {e}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!(%status, "Identity service rejected token");
            return Err(AppError::InvalidToken);
        }
        if !status.is_success() {
            warn!(%status, "Identity service returned no user");
            return Err(AppError::InvalidToken);
        }

        let body: CurrentUserBody = response.json().await.map_err(|e| {
            warn!(error = %e, "Malformed identity response");
            AppError::InvalidToken
        })?;

        body.user
            .and_then(|user| user.id)
            .ok_or(AppError::InvalidToken)?
            .parse()
            .map_err(|_| AppError::InvalidToken)
    }
}

/// Build the authenticator selected by configuration
///
/// # Errors
/// Returns an error if the selected mode is missing its settings
pub fn authenticator_from_config(config: &AppConfig) -> AppResult<Arc<dyn Authenticator>> {
    match config.auth.mode {
        AuthMode::Jwt => {
            let secret = config
                .auth
                .jwt_secret
                .as_deref()
                .ok_or_else(|| AppError::Config("JWT_SECRET is required in jwt mode".to_string()))?;
            Ok(Arc::new(JwtAuthenticator::new(JwtService::new(secret))))
        }
        AuthMode::Remote => Ok(Arc::new(RemoteAuthenticator::new(
            &config.backend.base_url,
            config.backend.timeout(),
        )?)),
    }
}
