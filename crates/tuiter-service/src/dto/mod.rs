//! Data transfer objects
//!
//! Request DTOs carry validation rules, response DTOs define the JSON shapes
//! handed back to clients, and mappers convert domain entities into them.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    BroadcastMessageRequest, CreateGroupRequest, CreateStoryRequest, CreateTuitRequest,
    LocationBody, LoginRequest, SendGroupMessageRequest, SendMessageRequest, SignupRequest,
    UpdateGroupRequest, UpdateMessageRequest, UpdateTuitRequest, UpdateUserRequest,
};
pub use responses::{
    AuthResponse, DeletedResponse, GroupMessageResponse, GroupResponse, HealthChecks,
    HealthResponse, LocationResponse, MessageResponse, ReadinessResponse, StatsResponse,
    StoryResponse, TuitResponse, UserResponse,
};
