//! Test fixtures
//!
//! Request bodies and response shapes as seen by an HTTP client.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use social_core::PostId;

/// Body of `POST /functions/handle-reaction`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl ReactionRequest {
    pub fn toggle(post_id: PostId, reaction_type: &str) -> Self {
        Self {
            post_id: Some(post_id.to_string()),
            reaction_type: Some(reaction_type.to_string()),
            mode: None,
        }
    }

    pub fn set(post_id: PostId, reaction_type: &str) -> Self {
        Self {
            mode: Some("set".to_string()),
            ..Self::toggle(post_id, reaction_type)
        }
    }
}

/// Counters as returned to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Counts {
    pub heart_count: i32,
    pub laugh_count: i32,
    pub hot_count: i32,
    pub broken_heart_count: i32,
}

/// Successful reaction response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionReply {
    pub success: bool,
    pub action: String,
    pub reaction_type: String,
    pub previous: Option<String>,
    pub current: Option<String>,
    pub old_reaction: Option<String>,
    pub new_reaction: Option<String>,
    pub counts: Counts,
}

/// Successful cleanup response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupReply {
    pub success: bool,
    pub message: String,
    pub posts_deleted: u64,
    pub reactions_deleted: u64,
}

/// Uniform error body
#[derive(Debug, Deserialize)]
pub struct ErrorReply {
    pub success: bool,
    pub error: String,
    pub code: String,
    pub details: Value,
}
