//! PostgreSQL implementation of GroupMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tuiter_core::entities::GroupMessage;
use tuiter_core::traits::{GroupMessageRepository, RepoResult};
use tuiter_core::value_objects::Snowflake;

use crate::models::GroupMessageModel;

use super::error::{group_message_not_found, map_db_error};

/// PostgreSQL implementation of GroupMessageRepository
#[derive(Clone)]
pub struct PgGroupMessageRepository {
    pool: PgPool,
}

impl PgGroupMessageRepository {
    /// Create a new PgGroupMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupMessageRepository for PgGroupMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GroupMessage>> {
        let result = sqlx::query_as::<_, GroupMessageModel>(
            r"
            SELECT id, group_id, sender, message, sent_on, attachment_key
            FROM group_messages
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GroupMessage::from))
    }

    #[instrument(skip(self))]
    async fn find_by_group(&self, group_id: Snowflake) -> RepoResult<Vec<GroupMessage>> {
        let results = sqlx::query_as::<_, GroupMessageModel>(
            r"
            SELECT id, group_id, sender, message, sent_on, attachment_key
            FROM group_messages
            WHERE group_id = $1
            ORDER BY sent_on
            ",
        )
        .bind(group_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GroupMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, message: &GroupMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO group_messages (id, group_id, sender, message, sent_on, attachment_key)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.group_id.into_inner())
        .bind(message.sender.into_inner())
        .bind(&message.message)
        .bind(message.sent_on)
        .bind(&message.attachment_key)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM group_messages WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(group_message_not_found(id));
        }

        Ok(())
    }
}
