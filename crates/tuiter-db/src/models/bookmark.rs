//! Bookmark database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bookmarks table
#[derive(Debug, Clone, FromRow)]
pub struct BookmarkModel {
    pub bookmarked_by: i64,
    pub bookmarked_tuit: i64,
    pub created_at: DateTime<Utc>,
}
