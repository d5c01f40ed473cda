//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies carrying user input
//! implement `Validate` and are enforced by the API's validated extractor.

use chrono::NaiveDate;
use serde::Deserialize;
use tuiter_core::Snowflake;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Geographic coordinates in a request body
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationBody {
    pub latitude: f64,
    pub longitude: f64,
}

/// Profile update request. The username is fixed at signup and absent here.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 64, message = "First name must be at most 64 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 64, message = "Last name must be at most 64 characters"))]
    pub last_name: Option<String>,

    pub profile_photo: Option<String>,

    pub header_image: Option<String>,

    #[validate(length(max = 500, message = "Biography must be at most 500 characters"))]
    pub biography: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    /// PERSONAL, ACADEMIC or PROFESSIONAL
    pub account_type: Option<String>,

    /// SINGLE, MARRIED or WIDOWED
    pub marital_status: Option<String>,

    pub location: Option<LocationBody>,
}

// ============================================================================
// Tuit Requests
// ============================================================================

/// Create tuit request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTuitRequest {
    #[validate(length(min = 1, max = 280, message = "Tuit must be 1-280 characters"))]
    pub tuit: String,
}

/// Update tuit request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTuitRequest {
    #[validate(length(min = 1, max = 280, message = "Tuit must be 1-280 characters"))]
    pub tuit: String,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Send direct message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,

    /// Storage key of an attached file, if any
    pub attachment_key: Option<String>,
}

/// Broadcast message request: one copy per recipient
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BroadcastMessageRequest {
    #[validate(length(min = 1, message = "At least one recipient is required"))]
    pub recipient_ids: Vec<Snowflake>,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,
}

/// Edit message request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: Option<String>,

    pub pinned: Option<bool>,
}

// ============================================================================
// Story Requests
// ============================================================================

/// Create story request. An empty viewer list makes the story public.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStoryRequest {
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub viewers: Vec<Snowflake>,
}

// ============================================================================
// Group Requests
// ============================================================================

/// Create group request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Group name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    pub members: Vec<Snowflake>,
}

/// Update group request (rename and/or replace the member list)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGroupRequest {
    #[validate(length(min = 1, max = 100, message = "Group name must be 1-100 characters"))]
    pub name: Option<String>,

    pub members: Option<Vec<Snowflake>>,
}

/// Send group message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendGroupMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub message: String,

    /// Storage key of an attached file, if any
    pub attachment_key: Option<String>,
}
