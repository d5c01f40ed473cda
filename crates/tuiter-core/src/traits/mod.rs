//! Ports - trait seams implemented by the infrastructure crates

mod notifier;
mod repositories;
mod session;

pub use notifier::{Notification, Notifier};
pub use repositories::{
    BookmarkRepository, FollowRepository, GroupMessageRepository, GroupRepository,
    MessageRepository, ReactionRepository, RepoResult, StoryRepository, TuitRepository,
    UserRepository,
};
pub use session::{Session, SessionStore};
