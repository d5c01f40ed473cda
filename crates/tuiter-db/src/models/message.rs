//! Direct message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub sender: i64,
    pub recipient: i64,
    pub message: String,
    pub sent_on: DateTime<Utc>,
    pub attachment_key: Option<String>,
    pub pinned: bool,
}
