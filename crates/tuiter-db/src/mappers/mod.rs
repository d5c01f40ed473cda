//! Entity to model mappers
//!
//! This module provides conversions between domain entities (tuiter-core)
//! and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - Assembly helpers combine a row with separately loaded join-table data

mod bookmark;
mod follow;
mod group;
mod group_message;
mod message;
mod reaction;
mod story;
mod tuit;
mod user;

pub use group::group_with_members;
pub use story::story_with_viewers;
