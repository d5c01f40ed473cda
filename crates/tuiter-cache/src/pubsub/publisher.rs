//! Redis Pub/Sub publisher.
//!
//! Publishes notifications to per-user Redis channels for distribution to
//! connected clients.

use async_trait::async_trait;
use redis::AsyncCommands;
use tuiter_core::{DomainError, Notification, Notifier, RepoResult, Snowflake};

use crate::pool::{RedisPool, RedisResult};

/// Channel prefix for per-user notification channels
const USER_CHANNEL_PREFIX: &str = "user:";

/// Name of the notification channel for a user
#[must_use]
pub fn user_channel(user_id: Snowflake) -> String {
    format!("{USER_CHANNEL_PREFIX}{user_id}")
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish a notification to a user's channel.
    ///
    /// Returns the number of subscribers that received it. Zero receivers is
    /// not an error; the user simply has no client connected right now.
    async fn publish(&self, user_id: Snowflake, notification: &Notification) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel = user_channel(user_id);
        let payload = serde_json::to_string(notification)?;

        let receivers: u32 = conn.publish(&channel, &payload).await?;

        tracing::debug!(
            channel = %channel,
            receivers = receivers,
            "Published notification"
        );

        Ok(receivers)
    }
}

#[async_trait]
impl Notifier for Publisher {
    async fn push(&self, user_id: Snowflake, notification: &Notification) -> RepoResult<()> {
        self.publish(user_id, notification)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;
        Ok(())
    }
}
