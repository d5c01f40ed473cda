//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. The request and
//! response shapes here mirror the API wire format on purpose, so a field
//! rename on the server breaks these tests instead of silently passing.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            username: signup.username.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub user: UserResponse,
}

/// Geographic coordinates
#[derive(Debug, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_photo: Option<String>,
    pub header_image: Option<String>,
    pub biography: Option<String>,
    pub date_of_birth: Option<String>,
    pub account_type: String,
    pub marital_status: String,
    pub location: Option<Location>,
    pub joined_at: String,
}

/// Profile update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Create tuit request
#[derive(Debug, Serialize)]
pub struct CreateTuitRequest {
    pub tuit: String,
}

impl CreateTuitRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            tuit: format!("Test tuit {suffix}"),
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            tuit: text.to_string(),
        }
    }
}

/// Update tuit request
#[derive(Debug, Serialize)]
pub struct UpdateTuitRequest {
    pub tuit: String,
}

/// Engagement counters on a tuit
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    pub replies: i32,
    pub retuits: i32,
    pub likes: i32,
    pub dislikes: i32,
}

/// Tuit response
#[derive(Debug, Deserialize)]
pub struct TuitResponse {
    pub id: String,
    pub posted_by: String,
    pub tuit: String,
    pub posted_on: String,
    pub stats: StatsResponse,
}

/// Send direct message request
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
}

impl SendMessageRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            message: content.to_string(),
        }
    }
}

/// Broadcast message request
#[derive(Debug, Serialize)]
pub struct BroadcastMessageRequest {
    pub recipient_ids: Vec<String>,
    pub message: String,
}

/// Update message request
#[derive(Debug, Default, Serialize)]
pub struct UpdateMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender: String,
    pub recipient: String,
    pub message: String,
    pub sent_on: String,
    pub attachment_key: Option<String>,
    pub pinned: bool,
}

/// Create story request
#[derive(Debug, Serialize)]
pub struct CreateStoryRequest {
    pub image: String,
    pub description: Option<String>,
    pub viewers: Vec<String>,
}

impl CreateStoryRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            image: format!("https://cdn.example.com/story{suffix}.jpg"),
            description: Some(format!("Test story {suffix}")),
            viewers: Vec::new(),
        }
    }
}

/// Story response
#[derive(Debug, Deserialize)]
pub struct StoryResponse {
    pub id: String,
    pub posted_by: String,
    pub image: String,
    pub description: Option<String>,
    pub posted_on: String,
    pub viewers: Vec<String>,
}

/// Create group request
#[derive(Debug, Serialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub members: Vec<String>,
}

impl CreateGroupRequest {
    pub fn unique(members: Vec<String>) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Group {suffix}"),
            members,
        }
    }
}

/// Update group request
#[derive(Debug, Default, Serialize)]
pub struct UpdateGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
}

/// Group response
#[derive(Debug, Deserialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub members: Vec<String>,
    pub created_on: String,
}

/// Send group message request
#[derive(Debug, Serialize)]
pub struct SendGroupMessageRequest {
    pub message: String,
}

impl SendGroupMessageRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            message: content.to_string(),
        }
    }
}

/// Group message response
#[derive(Debug, Deserialize)]
pub struct GroupMessageResponse {
    pub id: String,
    pub group_id: String,
    pub sender: String,
    pub message: String,
    pub sent_on: String,
    pub attachment_key: Option<String>,
}

/// Bulk delete response
#[derive(Debug, Deserialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
