//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
///
/// One row per (user, tuit, kind) edge. The kind column only ever holds
/// the values written through `ReactionKind::as_str`.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: i64,
    pub tuit_id: i64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}
