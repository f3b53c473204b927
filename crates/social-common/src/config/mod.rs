//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AuthConfig, AuthMode, BackendConfig, ConfigError, CorsConfig,
    DatabaseConfig, Environment, RateLimitConfig, ServerConfig,
};
