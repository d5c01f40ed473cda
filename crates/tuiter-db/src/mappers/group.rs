//! Group entity <-> model mapper

use tuiter_core::entities::Group;
use tuiter_core::value_objects::Snowflake;

use crate::models::GroupModel;

/// Assemble a Group entity from its row and the separately loaded
/// member list
pub fn group_with_members(model: GroupModel, member_ids: Vec<i64>) -> Group {
    Group {
        id: Snowflake::new(model.id),
        name: model.name,
        owner: Snowflake::new(model.owner),
        members: member_ids.into_iter().map(Snowflake::new).collect(),
        created_on: model.created_on,
    }
}
