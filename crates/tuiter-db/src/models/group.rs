//! Group database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for groups table
///
/// Membership lives in the group_members join table and is loaded
/// separately.
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: i64,
    pub name: String,
    pub owner: i64,
    pub created_on: DateTime<Utc>,
}
