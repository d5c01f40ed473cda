//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use tuiter_core::error::DomainError;
use tuiter_core::value_objects::Snowflake;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "tuit not found" error
pub fn tuit_not_found(id: Snowflake) -> DomainError {
    DomainError::TuitNotFound(id)
}

/// Create a "message not found" error
pub fn message_not_found(id: Snowflake) -> DomainError {
    DomainError::MessageNotFound(id)
}

/// Create a "story not found" error
pub fn story_not_found(id: Snowflake) -> DomainError {
    DomainError::StoryNotFound(id)
}

/// Create a "group not found" error
pub fn group_not_found(id: Snowflake) -> DomainError {
    DomainError::GroupNotFound(id)
}

/// Create a "group message not found" error
pub fn group_message_not_found(id: Snowflake) -> DomainError {
    DomainError::GroupMessageNotFound(id)
}
