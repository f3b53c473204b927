//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the shared_post_reactions table
///
/// `reaction` is kept as raw text: older rows hold emoji instead of the
/// symbolic name.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub reaction: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
