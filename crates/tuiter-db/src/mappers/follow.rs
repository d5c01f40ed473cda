//! Follow entity <-> model mapper

use tuiter_core::entities::Follow;
use tuiter_core::value_objects::Snowflake;

use crate::models::FollowModel;

/// Convert FollowModel to Follow entity
impl From<FollowModel> for Follow {
    fn from(model: FollowModel) -> Self {
        Follow {
            user_following: Snowflake::new(model.user_following),
            user_followed: Snowflake::new(model.user_followed),
            created_at: model.created_at,
        }
    }
}
