//! Domain entities - core business objects

mod bookmark;
mod follow;
mod group;
mod message;
mod reaction;
mod story;
mod tuit;
mod user;

pub use bookmark::Bookmark;
pub use follow::Follow;
pub use group::{Group, GroupMessage};
pub use message::Message;
pub use reaction::{Reaction, ReactionKind};
pub use story::Story;
pub use tuit::{Tuit, TuitStats};
pub use user::{AccountType, GeoLocation, MaritalStatus, User};
