//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in tuiter-core.
//! Each repository handles database operations for a specific domain entity.

mod bookmark;
mod error;
mod follow;
mod group;
mod group_message;
mod message;
mod reaction;
mod story;
mod tuit;
mod user;

pub use bookmark::PgBookmarkRepository;
pub use follow::PgFollowRepository;
pub use group::PgGroupRepository;
pub use group_message::PgGroupMessageRepository;
pub use message::PgMessageRepository;
pub use reaction::PgReactionRepository;
pub use story::PgStoryRepository;
pub use tuit::PgTuitRepository;
pub use user::PgUserRepository;
