//! Route definitions
//!
//! The reaction and cleanup functions are mounted under /functions, health
//! probes at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{cleanup, health, reactions};
use crate::state::AppState;

/// Path of the reaction endpoint
pub const HANDLE_REACTION_PATH: &str = "/functions/handle-reaction";

/// Path of the expiry sweep endpoint
pub const CLEANUP_EXPIRED_POSTS_PATH: &str = "/functions/cleanup-expired-posts";

/// Create the main API router (excluding health for separate middleware handling)
///
/// OPTIONS on either path is answered by the CORS middleware.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(HANDLE_REACTION_PATH, post(reactions::handle_reaction))
        .route(CLEANUP_EXPIRED_POSTS_PATH, post(cleanup::cleanup_expired_posts))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
