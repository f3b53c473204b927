//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use social_api::{create_app, AppState};
use social_common::{
    AppConfig, AppSettings, AuthConfig, AuthMode, Authenticator, BackendConfig, CorsConfig,
    DatabaseConfig, Environment, JwtAuthenticator, JwtService, RateLimitConfig, ServerConfig,
};
use social_core::UserId;
use social_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::memory::MemoryStore;

/// Shared secret used to sign test tokens
pub const TEST_SECRET: &str = "integration-test-secret-key-long-enough";

/// Service token accepted by the cleanup endpoint in tests
pub const TEST_SERVICE_TOKEN: &str = "integration-service-token";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with an empty store, JWT auth and the test service token
    pub async fn start() -> Result<Self> {
        Self::start_with_store(Arc::new(MemoryStore::new()), Some(TEST_SERVICE_TOKEN)).await
    }

    /// Start a server over the given store
    pub async fn start_with_store(store: Arc<MemoryStore>, service_token: Option<&str>) -> Result<Self> {
        let authenticator = Arc::new(JwtAuthenticator::new(JwtService::new(TEST_SECRET)));
        Self::start_with(store, authenticator, service_token).await
    }

    /// Start a server with a custom authenticator
    pub async fn start_with(
        store: Arc<MemoryStore>,
        authenticator: Arc<dyn Authenticator>,
        service_token: Option<&str>,
    ) -> Result<Self> {
        let service_context = ServiceContextBuilder::new()
            .reaction_repo(store.clone())
            .post_repo(store.clone())
            .authenticator(authenticator)
            .service_token(service_token.map(String::from))
            .build()?;

        let app = create_app(AppState::new(service_context, test_config()));

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(body)
            .send()
            .await?)
    }

    /// Make a POST request with a raw body and content type
    pub async fn post_raw(&self, path: &str, token: &str, body: &'static str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Make a bodiless POST request, optionally authenticated
    pub async fn post_empty(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        let mut request = self.client.post(&url);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        Ok(request.send().await?)
    }

    /// Make an OPTIONS request without preflight headers
    pub async fn options(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.request(reqwest::Method::OPTIONS, &url).send().await?)
    }
}

/// Configuration used by test servers
///
/// Nothing here touches the environment; the database section is unused
/// because the store is in memory.
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "social-reactions-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            run_migrations: false,
            migrations_dir: "./migrations".to_string(),
        },
        backend: BackendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            service_token: Some(TEST_SERVICE_TOKEN.to_string()),
            timeout_secs: 5,
        },
        auth: AuthConfig {
            mode: AuthMode::Jwt,
            jwt_secret: Some(TEST_SECRET.to_string()),
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 10_000,
            burst: 10_000,
        },
        cors: CorsConfig::default(),
    }
}

/// Issue a token for `user_id`, signed with the test secret
pub fn issue_token(user_id: UserId) -> String {
    JwtService::new(TEST_SECRET)
        .issue_access_token(user_id)
        .expect("Failed to issue test token")
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
