//! Follow handlers
//!
//! Endpoints for the follow graph.

use axum::{
    extract::{Path, State},
    Json,
};
use tuiter_core::UserRef;
use tuiter_service::{FollowService, UserResponse};

use crate::extractors::OptionalAuthUser;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Follow another user
///
/// POST /users/{uid}/follows/{ouid}
pub async fn follow_user(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path((uid, ouid)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;
    let other_id = ouid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?;

    let service = FollowService::new(state.service_context());
    service.follow(user_id, other_id).await?;
    Ok(NoContent)
}

/// Unfollow a user
///
/// DELETE /users/{uid}/follows/{ouid}
pub async fn unfollow_user(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path((uid, ouid)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;
    let other_id = ouid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?;

    let service = FollowService::new(state.service_context());
    service.unfollow(user_id, other_id).await?;
    Ok(NoContent)
}

/// Users the user follows
///
/// GET /users/{uid}/follows
pub async fn list_following(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = FollowService::new(state.service_context());
    let users = service.following(user_id).await?;
    Ok(Json(users))
}

/// Users following the user
///
/// GET /users/{uid}/followers
pub async fn list_followers(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = FollowService::new(state.service_context());
    let users = service.followers(user_id).await?;
    Ok(Json(users))
}
