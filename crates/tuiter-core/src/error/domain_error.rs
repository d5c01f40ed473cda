//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Tuit not found: {0}")]
    TuitNotFound(Snowflake),

    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Story not found: {0}")]
    StoryNotFound(Snowflake),

    #[error("Group not found: {0}")]
    GroupNotFound(Snowflake),

    #[error("Group message not found: {0}")]
    GroupMessageNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Users cannot follow themselves")]
    SelfFollow,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Cannot resolve 'me' without a session")]
    IdentityUnresolvable,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not a member of this group")]
    NotGroupMember,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Already following this user")]
    AlreadyFollowing,

    #[error("Tuit already bookmarked")]
    AlreadyBookmarked,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TuitNotFound(_) => "UNKNOWN_TUIT",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::StoryNotFound(_) => "UNKNOWN_STORY",
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",
            Self::GroupMessageNotFound(_) => "UNKNOWN_GROUP_MESSAGE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::SelfFollow => "SELF_FOLLOW",

            // Authorization
            Self::IdentityUnresolvable => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotGroupMember => "NOT_GROUP_MEMBER",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",
            Self::AlreadyBookmarked => "ALREADY_BOOKMARKED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::TuitNotFound(_)
                | Self::MessageNotFound(_)
                | Self::StoryNotFound(_)
                | Self::GroupNotFound(_)
                | Self::GroupMessageNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidUsername(_)
                | Self::ContentTooLong { .. }
                | Self::SelfFollow
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::IdentityUnresolvable | Self::InvalidCredentials | Self::NotGroupMember
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameAlreadyExists
                | Self::EmailAlreadyExists
                | Self::AlreadyFollowing
                | Self::AlreadyBookmarked
        )
    }
}
