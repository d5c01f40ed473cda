//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod bookmark;
pub mod context;
pub mod engagement;
pub mod error;
pub mod follow;
pub mod group;
pub mod group_message;
pub mod message;
pub mod story;
pub mod tuit;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use bookmark::BookmarkService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use group::GroupService;
pub use group_message::GroupMessageService;
pub use message::MessageService;
pub use story::StoryService;
pub use tuit::TuitService;
pub use user::UserService;
