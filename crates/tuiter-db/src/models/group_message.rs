//! Group message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for group_messages table
#[derive(Debug, Clone, FromRow)]
pub struct GroupMessageModel {
    pub id: i64,
    pub group_id: i64,
    pub sender: i64,
    pub message: String,
    pub sent_on: DateTime<Utc>,
    pub attachment_key: Option<String>,
}
