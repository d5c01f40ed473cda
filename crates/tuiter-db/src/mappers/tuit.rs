//! Tuit entity <-> model mapper

use tuiter_core::entities::{Tuit, TuitStats};
use tuiter_core::value_objects::Snowflake;

use crate::models::TuitModel;

/// Convert TuitModel to Tuit entity, folding the counter columns back
/// into the stats block
impl From<TuitModel> for Tuit {
    fn from(model: TuitModel) -> Self {
        Tuit {
            id: Snowflake::new(model.id),
            posted_by: Snowflake::new(model.posted_by),
            tuit: model.tuit,
            posted_on: model.posted_on,
            stats: TuitStats {
                replies: model.replies,
                retuits: model.retuits,
                likes: model.likes,
                dislikes: model.dislikes,
            },
        }
    }
}
