//! Message entity - a direct message between two users

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Direct message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub sender: Snowflake,
    pub recipient: Snowflake,
    pub message: String,
    pub sent_on: DateTime<Utc>,
    pub attachment_key: Option<String>,
    pub pinned: bool,
}

impl Message {
    /// Create a new Message
    pub fn new(id: Snowflake, sender: Snowflake, recipient: Snowflake, message: String) -> Self {
        Self {
            id,
            sender,
            recipient,
            message,
            sent_on: Utc::now(),
            attachment_key: None,
            pinned: false,
        }
    }

    /// Check if the message carries an attachment reference
    #[inline]
    pub fn has_attachment(&self) -> bool {
        self.attachment_key.is_some()
    }

    /// Check if the message body is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }

    /// Replace the message body
    pub fn edit(&mut self, message: String) {
        self.message = message;
    }
}
