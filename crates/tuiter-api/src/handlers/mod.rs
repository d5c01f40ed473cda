//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod bookmarks;
pub mod engagement;
pub mod follows;
pub mod group_messages;
pub mod groups;
pub mod health;
pub mod messages;
pub mod stories;
pub mod tuits;
pub mod users;
