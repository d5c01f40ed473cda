//! Group entities - a named set of users and the messages sent to it

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Group of users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Snowflake,
    pub name: String,
    pub owner: Snowflake,
    pub members: Vec<Snowflake>,
    pub created_on: DateTime<Utc>,
}

impl Group {
    /// Create a new Group; the owner is always a member.
    pub fn new(id: Snowflake, name: String, owner: Snowflake, mut members: Vec<Snowflake>) -> Self {
        if !members.contains(&owner) {
            members.push(owner);
        }
        Self {
            id,
            name,
            owner,
            members,
            created_on: Utc::now(),
        }
    }

    /// Check group membership
    pub fn is_member(&self, user_id: Snowflake) -> bool {
        self.members.contains(&user_id)
    }

    /// Number of members
    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Message sent to a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMessage {
    pub id: Snowflake,
    pub group_id: Snowflake,
    pub sender: Snowflake,
    pub message: String,
    pub sent_on: DateTime<Utc>,
    pub attachment_key: Option<String>,
}

impl GroupMessage {
    /// Create a new GroupMessage
    pub fn new(id: Snowflake, group_id: Snowflake, sender: Snowflake, message: String) -> Self {
        Self {
            id,
            group_id,
            sender,
            message,
            sent_on: Utc::now(),
            attachment_key: None,
        }
    }

    /// Check if the message body is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}
