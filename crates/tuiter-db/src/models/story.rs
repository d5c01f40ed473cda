//! Story database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for stories table
///
/// The viewer allow-list lives in the story_viewers join table and is
/// loaded separately. A story with no viewer rows is public.
#[derive(Debug, Clone, FromRow)]
pub struct StoryModel {
    pub id: i64,
    pub posted_by: i64,
    pub image: String,
    pub description: Option<String>,
    pub posted_on: DateTime<Utc>,
}
