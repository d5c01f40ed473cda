//! Bookmark entity <-> model mapper

use tuiter_core::entities::Bookmark;
use tuiter_core::value_objects::Snowflake;

use crate::models::BookmarkModel;

/// Convert BookmarkModel to Bookmark entity
impl From<BookmarkModel> for Bookmark {
    fn from(model: BookmarkModel) -> Self {
        Bookmark {
            bookmarked_by: Snowflake::new(model.bookmarked_by),
            bookmarked_tuit: Snowflake::new(model.bookmarked_tuit),
            created_at: model.created_at,
        }
    }
}
