//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility,
//! and password hashes never appear in any response shape.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the session token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(token: String, user: UserResponse) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Geographic coordinates in a response body
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocationResponse {
    pub latitude: f64,
    pub longitude: f64,
}

/// User profile response (everything except the password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub account_type: String,
    pub marital_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationResponse>,
    pub joined_at: DateTime<Utc>,
}

// ============================================================================
// Tuit Responses
// ============================================================================

/// Cached engagement counters on a tuit
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResponse {
    pub replies: i32,
    pub retuits: i32,
    pub likes: i32,
    pub dislikes: i32,
}

/// Tuit response
#[derive(Debug, Clone, Serialize)]
pub struct TuitResponse {
    pub id: String,
    pub posted_by: String,
    pub tuit: String,
    pub posted_on: DateTime<Utc>,
    pub stats: StatsResponse,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Direct message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender: String,
    pub recipient: String,
    pub message: String,
    pub sent_on: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_key: Option<String>,
    pub pinned: bool,
}

// ============================================================================
// Story Responses
// ============================================================================

/// Story response
#[derive(Debug, Clone, Serialize)]
pub struct StoryResponse {
    pub id: String,
    pub posted_by: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub posted_on: DateTime<Utc>,
    pub viewers: Vec<String>,
}

// ============================================================================
// Group Responses
// ============================================================================

/// Group response
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub members: Vec<String>,
    pub created_on: DateTime<Utc>,
}

/// Group message response
#[derive(Debug, Clone, Serialize)]
pub struct GroupMessageResponse {
    pub id: String,
    pub group_id: String,
    pub sender: String,
    pub message: String,
    pub sent_on: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_key: Option<String>,
}

/// Result of a bulk delete
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Per-dependency readiness checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
    pub redis: bool,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    #[must_use]
    pub fn new(database: bool, redis: bool) -> Self {
        Self {
            status: if database && redis { "ready" } else { "degraded" },
            checks: HealthChecks { database, redis },
        }
    }
}
