//! Story entity <-> model mapper

use tuiter_core::entities::Story;
use tuiter_core::value_objects::Snowflake;

use crate::models::StoryModel;

/// Assemble a Story entity from its row and the separately loaded
/// viewer allow-list
pub fn story_with_viewers(model: StoryModel, viewer_ids: Vec<i64>) -> Story {
    Story {
        id: Snowflake::new(model.id),
        posted_by: Snowflake::new(model.posted_by),
        image: model.image,
        description: model.description,
        posted_on: model.posted_on,
        viewers: viewer_ids.into_iter().map(Snowflake::new).collect(),
    }
}
