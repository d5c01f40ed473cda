//! Notifier port - realtime push events delivered to individual users
//!
//! The domain only decides *that* a user gets told about something; the
//! transport (pub/sub fan-out, websocket delivery) lives behind this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::traits::repositories::RepoResult;
use crate::value_objects::Snowflake;

/// Push events the backend emits to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Notification {
    NewMessage {
        message_id: Snowflake,
        sender_id: Snowflake,
    },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Push a notification to one user's channel
    async fn push(&self, user_id: Snowflake, notification: &Notification) -> RepoResult<()>;
}
