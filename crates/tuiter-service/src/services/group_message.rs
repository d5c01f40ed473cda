//! Group message service
//!
//! Messages sent into a group. Only members may send; delivery pushes
//! NEW_MESSAGE to every member except the sender.

use tracing::{info, instrument};
use tuiter_core::entities::GroupMessage;
use tuiter_core::{DomainError, Notification, Snowflake};

use crate::dto::{GroupMessageResponse, SendGroupMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Group message service
pub struct GroupMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupMessageService<'a> {
    /// Create a new GroupMessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a message to the group as `sender_id`
    #[instrument(skip(self, request))]
    pub async fn send(
        &self,
        group_id: Snowflake,
        sender_id: Snowflake,
        request: SendGroupMessageRequest,
    ) -> ServiceResult<GroupMessageResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::GroupNotFound(group_id)))?;

        if !group.is_member(sender_id) {
            return Err(ServiceError::Domain(DomainError::NotGroupMember));
        }

        let mut message = GroupMessage::new(
            self.ctx.generate_id(),
            group_id,
            sender_id,
            request.message,
        );
        message.attachment_key = request.attachment_key;

        self.ctx.group_message_repo().create(&message).await?;

        info!(
            message_id = %message.id,
            group_id = %group_id,
            sender_id = %sender_id,
            "Group message sent"
        );

        // Fan out to the rest of the group; a failed push drops silently.
        let notification = Notification::NewMessage {
            message_id: message.id,
            sender_id,
        };
        for member in group.members.iter().filter(|m| **m != sender_id) {
            self.ctx.notifier().push(*member, &notification).await.ok();
        }

        Ok(GroupMessageResponse::from(&message))
    }

    /// Messages sent to the group, oldest first
    #[instrument(skip(self))]
    pub async fn list(&self, group_id: Snowflake) -> ServiceResult<Vec<GroupMessageResponse>> {
        if self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::Domain(DomainError::GroupNotFound(group_id)));
        }

        let messages = self.ctx.group_message_repo().find_by_group(group_id).await?;
        Ok(messages.iter().map(GroupMessageResponse::from).collect())
    }

    /// Get one group message by id
    ///
    /// The message must belong to `group_id`; an id from another group
    /// reads as not found here.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        group_id: Snowflake,
        message_id: Snowflake,
    ) -> ServiceResult<GroupMessageResponse> {
        let message = self.load_in_group(group_id, message_id).await?;
        Ok(GroupMessageResponse::from(&message))
    }

    /// Delete a group message
    #[instrument(skip(self))]
    pub async fn delete(&self, group_id: Snowflake, message_id: Snowflake) -> ServiceResult<()> {
        self.load_in_group(group_id, message_id).await?;

        self.ctx.group_message_repo().delete(message_id).await?;

        info!(message_id = %message_id, group_id = %group_id, "Group message deleted");

        Ok(())
    }

    async fn load_in_group(
        &self,
        group_id: Snowflake,
        message_id: Snowflake,
    ) -> ServiceResult<GroupMessage> {
        let message = self
            .ctx
            .group_message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::GroupMessageNotFound(
                message_id,
            )))?;

        if message.group_id != group_id {
            return Err(ServiceError::Domain(DomainError::GroupMessageNotFound(
                message_id,
            )));
        }

        Ok(message)
    }
}
