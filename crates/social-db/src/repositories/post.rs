//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use social_core::entities::Post;
use social_core::traits::{PostRepository, RepoResult, SweepReport};
use social_core::value_objects::PostId;

use crate::models::PostModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, heart_count, laugh_count, hot_count, broken_heart_count,
                   expires_at, created_at
            FROM shared_posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn delete_expired(&self, now: DateTime<Utc>) -> RepoResult<SweepReport> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the expired rows so no reaction lands on them mid-sweep
        let expired = sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT id FROM shared_posts
            WHERE expires_at < $1
            FOR UPDATE
            ",
        )
        .bind(now)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if expired.is_empty() {
            tx.commit().await.map_err(map_db_error)?;
            return Ok(SweepReport::default());
        }

        let reactions = sqlx::query(
            r"
            DELETE FROM shared_post_reactions WHERE post_id = ANY($1)
            ",
        )
        .bind(&expired)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let posts = sqlx::query(
            r"
            DELETE FROM shared_posts WHERE id = ANY($1)
            ",
        )
        .bind(&expired)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let report = SweepReport {
            posts_deleted: posts.rows_affected(),
            reactions_deleted: reactions.rows_affected(),
        };
        debug!(
            posts_deleted = report.posts_deleted,
            reactions_deleted = report.reactions_deleted,
            "Expired posts swept"
        );
        Ok(report)
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
