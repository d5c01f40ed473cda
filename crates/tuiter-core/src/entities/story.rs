//! Story entity - ephemeral media post with an optional viewer allow-list

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::Snowflake;

/// Story entity.
///
/// An empty `viewers` list means the story is public; a non-empty list
/// restricts visibility to exactly those users (plus the author).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: Snowflake,
    pub posted_by: Snowflake,
    pub image: String,
    pub description: Option<String>,
    pub posted_on: DateTime<Utc>,
    pub viewers: Vec<Snowflake>,
}

impl Story {
    /// Create a new public Story
    pub fn new(id: Snowflake, posted_by: Snowflake, image: String) -> Self {
        Self {
            id,
            posted_by,
            image,
            description: None,
            posted_on: Utc::now(),
            viewers: Vec::new(),
        }
    }

    /// Check if the story is visible to everyone
    #[inline]
    pub fn is_public(&self) -> bool {
        self.viewers.is_empty()
    }

    /// Check if a user may view this story
    pub fn is_visible_to(&self, user_id: Snowflake) -> bool {
        self.is_public() || self.posted_by == user_id || self.viewers.contains(&user_id)
    }

    /// Check if the story was posted within the last `hours` hours
    pub fn posted_within(&self, hours: i64) -> bool {
        Utc::now() - self.posted_on < Duration::hours(hours)
    }
}
