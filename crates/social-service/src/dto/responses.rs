//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names are
//! camelCase except the counters, which keep their column names.

use chrono::{DateTime, Utc};
use serde::Serialize;
use social_core::ledger::ReactionAction;
use social_core::ReactionKind;

// ============================================================================
// Reaction Responses
// ============================================================================

/// Post counters after a reaction was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountsResponse {
    pub heart_count: i32,
    pub laugh_count: i32,
    pub hot_count: i32,
    pub broken_heart_count: i32,
}

/// Result of `POST /functions/handle-reaction`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub success: bool,
    pub action: ReactionAction,
    /// Kind named in the request
    pub reaction_type: ReactionKind,
    /// Caller's kind before the call
    pub previous: Option<ReactionKind>,
    /// Caller's kind after the call
    pub current: Option<ReactionKind>,
    /// Set only when the kind was switched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_reaction: Option<ReactionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_reaction: Option<ReactionKind>,
    pub counts: CountsResponse,
}

// ============================================================================
// Cleanup Responses
// ============================================================================

/// Result of `POST /functions/cleanup-expired-posts`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    pub success: bool,
    pub message: String,
    pub posts_deleted: u64,
    pub reactions_deleted: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
