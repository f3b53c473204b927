//! Domain to DTO mappers
//!
//! Implements `From` conversions from ledger and sweep results to response DTOs.

use social_core::entities::ReactionCounts;
use social_core::ledger::{ReactionAction, ReactionOutcome};
use social_core::traits::SweepReport;

use super::responses::{CleanupResponse, CountsResponse, ReactionResponse};

const CLEANUP_MESSAGE: &str = "Expired posts cleaned up successfully";

impl From<ReactionCounts> for CountsResponse {
    fn from(counts: ReactionCounts) -> Self {
        Self {
            heart_count: counts.heart,
            laugh_count: counts.laugh,
            hot_count: counts.hot,
            broken_heart_count: counts.broken_heart,
        }
    }
}

impl From<ReactionOutcome> for ReactionResponse {
    fn from(outcome: ReactionOutcome) -> Self {
        let switched = outcome.action == ReactionAction::Changed;
        Self {
            success: true,
            action: outcome.action,
            reaction_type: outcome.kind,
            previous: outcome.previous,
            current: outcome.current,
            old_reaction: outcome.previous.filter(|_| switched),
            new_reaction: outcome.current.filter(|_| switched),
            counts: outcome.counts.into(),
        }
    }
}

impl From<SweepReport> for CleanupResponse {
    fn from(report: SweepReport) -> Self {
        Self {
            success: true,
            message: CLEANUP_MESSAGE.to_string(),
            posts_deleted: report.posts_deleted,
            reactions_deleted: report.reactions_deleted,
        }
    }
}
