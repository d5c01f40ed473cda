//! Follow entity - directed edge between two users

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Follow edge: `user_following` follows `user_followed`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub user_following: Snowflake,
    pub user_followed: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a new Follow edge
    pub fn new(user_following: Snowflake, user_followed: Snowflake) -> Self {
        Self {
            user_following,
            user_followed,
            created_at: Utc::now(),
        }
    }

    /// Check if both ends point at the same user
    #[inline]
    pub fn is_self_follow(&self) -> bool {
        self.user_following == self.user_followed
    }
}
