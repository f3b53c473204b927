//! Post model -> entity mapper

use social_core::entities::{Post, ReactionCounts};
use social_core::value_objects::PostId;

use crate::models::{PostCountsModel, PostModel};

/// Convert counter columns to ReactionCounts
impl From<PostCountsModel> for ReactionCounts {
    fn from(model: PostCountsModel) -> Self {
        ReactionCounts {
            heart: model.heart_count,
            laugh: model.laugh_count,
            hot: model.hot_count,
            broken_heart: model.broken_heart_count,
        }
    }
}

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            counts: ReactionCounts {
                heart: model.heart_count,
                laugh: model.laugh_count,
                hot: model.hot_count,
                broken_heart: model.broken_heart_count,
            },
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}
