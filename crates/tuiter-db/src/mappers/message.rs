//! Message entity <-> model mapper

use tuiter_core::entities::Message;
use tuiter_core::value_objects::Snowflake;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Snowflake::new(model.id),
            sender: Snowflake::new(model.sender),
            recipient: Snowflake::new(model.recipient),
            message: model.message,
            sent_on: model.sent_on,
            attachment_key: model.attachment_key,
            pinned: model.pinned,
        }
    }
}
