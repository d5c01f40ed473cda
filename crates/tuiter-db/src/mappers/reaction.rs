//! Reaction entity <-> model mapper

use tuiter_core::entities::{Reaction, ReactionKind};
use tuiter_core::value_objects::Snowflake;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        // kind is write-constrained to the as_str forms
        let kind = model.kind.parse().unwrap_or(ReactionKind::Like);

        Reaction {
            user_id: Snowflake::new(model.user_id),
            tuit_id: Snowflake::new(model.tuit_id),
            kind,
            created_at: model.created_at,
        }
    }
}
