//! # tuiter-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AccountType, Bookmark, Follow, GeoLocation, Group, GroupMessage, MaritalStatus, Message,
    Reaction, ReactionKind, Story, Tuit, TuitStats, User,
};
pub use error::DomainError;
pub use traits::{
    BookmarkRepository, FollowRepository, GroupMessageRepository, GroupRepository,
    MessageRepository, Notification, Notifier, ReactionRepository, RepoResult, Session,
    SessionStore, StoryRepository, TuitRepository, UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError, UserRef};
