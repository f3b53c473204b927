//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use social_core::entities::{Reaction, ReactionCounts};
use social_core::error::DomainError;
use social_core::ledger::{ReactionCommand, ReactionOutcome, ReactionTransition, RowWrite};
use social_core::traits::{ReactionRepository, RepoResult};
use social_core::value_objects::{PostId, ReactionId, ReactionKind, UserId};

use crate::models::{PostCountsModel, ReactionModel};

use super::error::{map_db_error, map_unique_violation, post_not_found};

/// PostgreSQL implementation of ReactionRepository
///
/// `apply` runs in a single transaction: the post row is locked with
/// `FOR UPDATE`, so commands on the same post are serialized while commands
/// on different posts proceed in parallel.
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self), fields(post_id = %command.post_id, user_id = %command.user_id))]
    async fn apply(&self, command: &ReactionCommand) -> RepoResult<ReactionOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked = sqlx::query_as::<_, PostCountsModel>(
            r"
            SELECT heart_count, laugh_count, hot_count, broken_heart_count
            FROM shared_posts
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(command.post_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| post_not_found(command.post_id))?;

        let existing = sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, post_id, user_id, reaction, created_at, updated_at
            FROM shared_post_reactions
            WHERE post_id = $1 AND user_id = $2
            ",
        )
        .bind(command.post_id.into_inner())
        .bind(command.user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(Reaction::try_from)
        .transpose()?;

        let transition =
            ReactionTransition::for_command(existing.as_ref().map(|r| r.kind), command);
        let now = Utc::now();

        match transition.row {
            RowWrite::Insert(kind) => {
                sqlx::query(
                    r"
                    INSERT INTO shared_post_reactions (id, post_id, user_id, reaction, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $5)
                    ",
                )
                .bind(ReactionId::generate().into_inner())
                .bind(command.post_id.into_inner())
                .bind(command.user_id.into_inner())
                .bind(kind.as_str())
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    map_unique_violation(e, || DomainError::ReactionConflict {
                        post_id: command.post_id,
                        user_id: command.user_id,
                    })
                })?;
            }
            RowWrite::Update(kind) => {
                sqlx::query(
                    r"
                    UPDATE shared_post_reactions
                    SET reaction = $3, updated_at = $4
                    WHERE post_id = $1 AND user_id = $2
                    ",
                )
                .bind(command.post_id.into_inner())
                .bind(command.user_id.into_inner())
                .bind(kind.as_str())
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            RowWrite::Delete => {
                sqlx::query(
                    r"
                    DELETE FROM shared_post_reactions
                    WHERE post_id = $1 AND user_id = $2
                    ",
                )
                .bind(command.post_id.into_inner())
                .bind(command.user_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            RowWrite::Keep => {}
        }

        let counts = if transition.delta.is_zero() {
            ReactionCounts::from(locked)
        } else {
            let delta = transition.delta;
            sqlx::query_as::<_, PostCountsModel>(
                r"
                UPDATE shared_posts
                SET heart_count = GREATEST(heart_count + $2, 0),
                    laugh_count = GREATEST(laugh_count + $3, 0),
                    hot_count = GREATEST(hot_count + $4, 0),
                    broken_heart_count = GREATEST(broken_heart_count + $5, 0)
                WHERE id = $1
                RETURNING heart_count, laugh_count, hot_count, broken_heart_count
                ",
            )
            .bind(command.post_id.into_inner())
            .bind(delta.heart)
            .bind(delta.laugh)
            .bind(delta.hot)
            .bind(delta.broken_heart)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?
            .into()
        };

        tx.commit().await.map_err(map_db_error)?;

        debug!(
            action = %transition.action,
            kind = %command.kind,
            previous = ?transition.previous,
            "Reaction applied"
        );

        Ok(ReactionOutcome::new(command.kind, &transition, counts))
    }

    #[instrument(skip(self))]
    async fn find(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>> {
        sqlx::query_as::<_, ReactionModel>(
            r"
            SELECT id, post_id, user_id, reaction, created_at, updated_at
            FROM shared_post_reactions
            WHERE post_id = $1 AND user_id = $2
            ",
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(Reaction::try_from)
        .transpose()
    }

    #[instrument(skip(self))]
    async fn normalize_legacy(&self) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let mut rewritten = 0;

        for kind in ReactionKind::ALL {
            let legacy: Vec<String> = kind
                .legacy_values()
                .iter()
                .map(|value| (*value).to_string())
                .collect();

            let result = sqlx::query(
                r"
                UPDATE shared_post_reactions
                SET reaction = $1, updated_at = NOW()
                WHERE reaction = ANY($2)
                ",
            )
            .bind(kind.as_str())
            .bind(legacy)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            rewritten += result.rows_affected();
        }

        tx.commit().await.map_err(map_db_error)?;

        if rewritten > 0 {
            info!(rewritten, "Normalized legacy emoji reactions");
        }
        Ok(rewritten)
    }
}
