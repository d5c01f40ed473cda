//! Database models - SQLx-compatible structs for PostgreSQL tables

mod bookmark;
mod follow;
mod group;
mod group_message;
mod message;
mod reaction;
mod story;
mod tuit;
mod user;

pub use bookmark::BookmarkModel;
pub use follow::FollowModel;
pub use group::GroupModel;
pub use group_message::GroupMessageModel;
pub use message::MessageModel;
pub use reaction::ReactionModel;
pub use story::StoryModel;
pub use tuit::TuitModel;
pub use user::UserModel;
