//! Follow database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for follows table
#[derive(Debug, Clone, FromRow)]
pub struct FollowModel {
    pub user_following: i64,
    pub user_followed: i64,
    pub created_at: DateTime<Utc>,
}
