//! # social-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    authenticator_from_config, Authenticator, Claims, JwtAuthenticator, JwtService,
    RemoteAuthenticator, CURRENT_USER_PATH,
};
pub use config::{
    AppConfig, AppSettings, AuthConfig, AuthMode, BackendConfig, ConfigError, CorsConfig,
    DatabaseConfig, Environment, RateLimitConfig, ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
