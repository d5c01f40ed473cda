//! Bookmark handlers
//!
//! Endpoints for saving tuits to read later.

use axum::{
    extract::{Path, State},
    Json,
};
use tuiter_core::UserRef;
use tuiter_service::{BookmarkService, TuitResponse, UserResponse};

use crate::extractors::OptionalAuthUser;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Bookmark a tuit
///
/// POST /users/{uid}/bookmarks/{tid}
pub async fn add_bookmark(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;
    let tuit_id = tid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid tuit id format"))?;

    let service = BookmarkService::new(state.service_context());
    service.bookmark(user_id, tuit_id).await?;
    Ok(NoContent)
}

/// Remove a bookmark
///
/// DELETE /users/{uid}/bookmarks/{tid}
pub async fn remove_bookmark(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;
    let tuit_id = tid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid tuit id format"))?;

    let service = BookmarkService::new(state.service_context());
    service.unbookmark(user_id, tuit_id).await?;
    Ok(NoContent)
}

/// Tuits the user bookmarked
///
/// GET /users/{uid}/bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<Vec<TuitResponse>>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = BookmarkService::new(state.service_context());
    let tuits = service.tuits_of(user_id).await?;
    Ok(Json(tuits))
}

/// Users who bookmarked a tuit
///
/// GET /tuits/{tid}/bookmarks
pub async fn list_bookmarkers(
    State(state): State<AppState>,
    Path(tid): Path<String>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let tuit_id = tid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid tuit id format"))?;

    let service = BookmarkService::new(state.service_context());
    let users = service.users_of(tuit_id).await?;
    Ok(Json(users))
}
