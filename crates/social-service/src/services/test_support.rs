//! Recording repository doubles for service unit tests

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use social_common::auth::{JwtAuthenticator, JwtService};
use social_core::entities::{Post, Reaction, ReactionCounts};
use social_core::ledger::{ReactionCommand, ReactionOutcome, ReactionTransition};
use social_core::traits::{PostRepository, ReactionRepository, RepoResult, SweepReport};
use social_core::{DomainError, PostId, UserId};

use super::context::{ServiceContext, ServiceContextBuilder};

pub const SECRET: &str = "service-test-secret-long-enough";

/// Records every call; treats each command as a first reaction
#[derive(Default)]
pub struct RecordingRepo {
    pub commands: Mutex<Vec<ReactionCommand>>,
    pub sweeps: Mutex<Vec<DateTime<Utc>>>,
    pub fail_ping: bool,
}

#[async_trait]
impl ReactionRepository for RecordingRepo {
    async fn apply(&self, command: &ReactionCommand) -> RepoResult<ReactionOutcome> {
        self.commands.lock().push(*command);
        let transition = ReactionTransition::for_command(None, command);
        let mut counts = ReactionCounts::default();
        counts.apply(&transition.delta);
        Ok(ReactionOutcome::new(command.kind, &transition, counts))
    }

    async fn find(&self, _post_id: PostId, _user_id: UserId) -> RepoResult<Option<Reaction>> {
        Ok(None)
    }

    async fn normalize_legacy(&self) -> RepoResult<u64> {
        Ok(0)
    }
}

#[async_trait]
impl PostRepository for RecordingRepo {
    async fn find_by_id(&self, _id: PostId) -> RepoResult<Option<Post>> {
        Ok(None)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> RepoResult<SweepReport> {
        self.sweeps.lock().push(now);
        Ok(SweepReport {
            posts_deleted: 2,
            reactions_deleted: 5,
        })
    }

    async fn ping(&self) -> RepoResult<()> {
        if self.fail_ping {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn issue_token(user_id: UserId) -> String {
    JwtService::new(SECRET).issue_access_token(user_id).unwrap()
}

pub fn context_with_repo(repo: Arc<RecordingRepo>, token: Option<&str>) -> ServiceContext {
    ServiceContextBuilder::new()
        .reaction_repo(repo.clone())
        .post_repo(repo)
        .authenticator(Arc::new(JwtAuthenticator::new(JwtService::new(SECRET))))
        .service_token(token.map(String::from))
        .build()
        .unwrap()
}

pub fn context_with_token(token: Option<&str>) -> ServiceContext {
    context_with_repo(Arc::new(RecordingRepo::default()), token)
}
