//! Bookmark entity - a user saving a tuit for later

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Bookmark edge between a user and a tuit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub bookmarked_by: Snowflake,
    pub bookmarked_tuit: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Create a new Bookmark
    pub fn new(bookmarked_by: Snowflake, bookmarked_tuit: Snowflake) -> Self {
        Self {
            bookmarked_by,
            bookmarked_tuit,
            created_at: Utc::now(),
        }
    }
}
