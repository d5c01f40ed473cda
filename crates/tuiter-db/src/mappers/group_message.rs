//! Group message entity <-> model mapper

use tuiter_core::entities::GroupMessage;
use tuiter_core::value_objects::Snowflake;

use crate::models::GroupMessageModel;

/// Convert GroupMessageModel to GroupMessage entity
impl From<GroupMessageModel> for GroupMessage {
    fn from(model: GroupMessageModel) -> Self {
        GroupMessage {
            id: Snowflake::new(model.id),
            group_id: Snowflake::new(model.group_id),
            sender: Snowflake::new(model.sender),
            message: model.message,
            sent_on: model.sent_on,
            attachment_key: model.attachment_key,
        }
    }
}
