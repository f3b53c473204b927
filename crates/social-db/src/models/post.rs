//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the shared_posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: Uuid,
    pub heart_count: i32,
    pub laugh_count: i32,
    pub hot_count: i32,
    pub broken_heart_count: i32,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Counter columns only (from locking reads and counter updates)
#[derive(Debug, Clone, Copy, FromRow)]
pub struct PostCountsModel {
    pub heart_count: i32,
    pub laugh_count: i32,
    pub hot_count: i32,
    pub broken_heart_count: i32,
}
