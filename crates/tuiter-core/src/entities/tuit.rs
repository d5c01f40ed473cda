//! Tuit entity - a user-authored post with cached engagement counters

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Denormalized engagement counters cached on a tuit.
///
/// The counters are a projection: the reaction edges remain the source of
/// truth, and `likes`/`dislikes` must equal the edge counts whenever no
/// toggle is in flight. They can always be rebuilt from the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TuitStats {
    pub replies: i32,
    pub retuits: i32,
    pub likes: i32,
    pub dislikes: i32,
}

impl TuitStats {
    /// Create a zeroed stats block (a fresh tuit has no engagement)
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply like/dislike deltas, clamping each counter at zero.
    ///
    /// Clamping matches the persistent update (`GREATEST(likes + d, 0)`):
    /// a pre-existing skew must never drive a counter negative.
    pub fn apply(&mut self, likes_delta: i32, dislikes_delta: i32) {
        self.likes = (self.likes + likes_delta).max(0);
        self.dislikes = (self.dislikes + dislikes_delta).max(0);
    }
}

/// Tuit entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuit {
    pub id: Snowflake,
    pub posted_by: Snowflake,
    pub tuit: String,
    pub posted_on: DateTime<Utc>,
    pub stats: TuitStats,
}

impl Tuit {
    /// Create a new Tuit with zeroed stats
    pub fn new(id: Snowflake, posted_by: Snowflake, tuit: String) -> Self {
        Self {
            id,
            posted_by,
            tuit,
            posted_on: Utc::now(),
            stats: TuitStats::new(),
        }
    }

    /// Check if the tuit body is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tuit.trim().is_empty()
    }

    /// Replace the tuit body
    pub fn edit(&mut self, tuit: String) {
        self.tuit = tuit;
    }
}
