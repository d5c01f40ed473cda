//! Direct message service
//!
//! Sending, broadcasting, and reading one-to-one messages. Each delivery
//! pushes a NEW_MESSAGE event to the recipient's channel; a failed push
//! never fails the send, the message is already persisted.

use tracing::{info, instrument, warn};
use tuiter_core::entities::Message;
use tuiter_core::{DomainError, Notification, Snowflake};

use crate::dto::{
    BroadcastMessageRequest, MessageResponse, SendMessageRequest, UpdateMessageRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a message from `sender_id` to `recipient_id`
    #[instrument(skip(self, request))]
    pub async fn send(
        &self,
        sender_id: Snowflake,
        recipient_id: Snowflake,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        if self
            .ctx
            .user_repo()
            .find_by_id(recipient_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::Domain(DomainError::UserNotFound(
                recipient_id,
            )));
        }

        let mut message = Message::new(
            self.ctx.generate_id(),
            sender_id,
            recipient_id,
            request.message,
        );
        message.attachment_key = request.attachment_key;

        self.ctx.message_repo().create(&message).await?;

        info!(
            message_id = %message.id,
            sender_id = %sender_id,
            recipient_id = %recipient_id,
            "Message sent"
        );

        self.notify_delivery(&message).await;

        Ok(MessageResponse::from(&message))
    }

    /// Send the same body to several recipients, one message row each.
    /// Unknown recipient ids are skipped rather than failing the batch.
    #[instrument(skip(self, request), fields(recipients = request.recipient_ids.len()))]
    pub async fn broadcast(
        &self,
        sender_id: Snowflake,
        request: BroadcastMessageRequest,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let mut sent = Vec::with_capacity(request.recipient_ids.len());

        for recipient_id in request.recipient_ids {
            if self
                .ctx
                .user_repo()
                .find_by_id(recipient_id)
                .await?
                .is_none()
            {
                warn!(recipient_id = %recipient_id, "Skipping unknown broadcast recipient");
                continue;
            }

            let message = Message::new(
                self.ctx.generate_id(),
                sender_id,
                recipient_id,
                request.message.clone(),
            );
            self.ctx.message_repo().create(&message).await?;
            self.notify_delivery(&message).await;
            sent.push(MessageResponse::from(&message));
        }

        info!(sender_id = %sender_id, delivered = sent.len(), "Broadcast sent");

        Ok(sent)
    }

    /// Messages sent by `sender_id` to `recipient_id`, oldest first
    #[instrument(skip(self))]
    pub async fn conversation(
        &self,
        sender_id: Snowflake,
        recipient_id: Snowflake,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let messages = self
            .ctx
            .message_repo()
            .find_between(sender_id, recipient_id)
            .await?;
        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Get one message by id
    #[instrument(skip(self))]
    pub async fn get(&self, message_id: Snowflake) -> ServiceResult<MessageResponse> {
        let message = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::MessageNotFound(
                message_id,
            )))?;
        Ok(MessageResponse::from(&message))
    }

    /// Edit the body and/or pinned flag of a message
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        message_id: Snowflake,
        request: UpdateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let mut message = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::MessageNotFound(
                message_id,
            )))?;

        if let Some(body) = request.message {
            message.edit(body);
        }
        if let Some(pinned) = request.pinned {
            message.pinned = pinned;
        }

        self.ctx.message_repo().update(&message).await?;

        info!(message_id = %message_id, "Message updated");

        Ok(MessageResponse::from(&message))
    }

    /// Delete a message
    #[instrument(skip(self))]
    pub async fn delete(&self, message_id: Snowflake) -> ServiceResult<()> {
        if self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::Domain(DomainError::MessageNotFound(
                message_id,
            )));
        }

        self.ctx.message_repo().delete(message_id).await?;

        info!(message_id = %message_id, "Message deleted");

        Ok(())
    }

    /// Fire-and-forget push to the recipient's channel
    async fn notify_delivery(&self, message: &Message) {
        let notification = Notification::NewMessage {
            message_id: message.id,
            sender_id: message.sender,
        };
        self.ctx
            .notifier()
            .push(message.recipient, &notification)
            .await
            .ok();
    }
}
