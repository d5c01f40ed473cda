//! Tuit database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for tuits table
///
/// The four counters are the denormalized stats block. They live on the
/// same row as the tuit body so a timeline read is a single query.
#[derive(Debug, Clone, FromRow)]
pub struct TuitModel {
    pub id: i64,
    pub posted_by: i64,
    pub tuit: String,
    pub posted_on: DateTime<Utc>,
    pub replies: i32,
    pub retuits: i32,
    pub likes: i32,
    pub dislikes: i32,
}
