//! Engagement handlers
//!
//! Like and dislike toggles plus the reaction queries. The toggle routes
//! answer with a bare 200 on success whether the edge was added or removed.

use axum::{
    extract::{Path, State},
    Json,
};
use tuiter_core::{ReactionKind, UserRef};
use tuiter_service::{EngagementService, TuitResponse, UserResponse};

use crate::extractors::OptionalAuthUser;
use crate::response::{ApiError, ApiResult, EmptyOk};
use crate::state::AppState;

/// Toggle a like
///
/// PUT /users/{uid}/likes/{tid}
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<EmptyOk> {
    toggle(&state, &auth, &uid, &tid, ReactionKind::Like).await
}

/// Toggle a dislike
///
/// PUT /users/{uid}/dislikes/{tid}
pub async fn toggle_dislike(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path((uid, tid)): Path<(String, String)>,
) -> ApiResult<EmptyOk> {
    toggle(&state, &auth, &uid, &tid, ReactionKind::Dislike).await
}

async fn toggle(
    state: &AppState,
    auth: &OptionalAuthUser,
    uid: &str,
    tid: &str,
    kind: ReactionKind,
) -> ApiResult<EmptyOk> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;
    let tuit_id = tid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid tuit id format"))?;

    let service = EngagementService::new(state.service_context());
    service.toggle(user_id, tuit_id, kind).await?;
    Ok(EmptyOk)
}

/// Users who liked a tuit
///
/// GET /tuits/{tid}/likes
pub async fn list_tuit_likes(
    State(state): State<AppState>,
    Path(tid): Path<String>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    reactors(&state, &tid, ReactionKind::Like).await
}

/// Users who disliked a tuit
///
/// GET /tuits/{tid}/dislikes
pub async fn list_tuit_dislikes(
    State(state): State<AppState>,
    Path(tid): Path<String>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    reactors(&state, &tid, ReactionKind::Dislike).await
}

async fn reactors(
    state: &AppState,
    tid: &str,
    kind: ReactionKind,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let tuit_id = tid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid tuit id format"))?;

    let service = EngagementService::new(state.service_context());
    let users = service.reactors(tuit_id, kind).await?;
    Ok(Json(users))
}

/// Tuits the user liked
///
/// GET /users/{uid}/likes
pub async fn list_liked_tuits(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<Vec<TuitResponse>>> {
    reacted_tuits(&state, &auth, &uid, ReactionKind::Like).await
}

/// Tuits the user disliked
///
/// GET /users/{uid}/dislikes
pub async fn list_disliked_tuits(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<Vec<TuitResponse>>> {
    reacted_tuits(&state, &auth, &uid, ReactionKind::Dislike).await
}

async fn reacted_tuits(
    state: &AppState,
    auth: &OptionalAuthUser,
    uid: &str,
    kind: ReactionKind,
) -> ApiResult<Json<Vec<TuitResponse>>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = EngagementService::new(state.service_context());
    let tuits = service.reacted_tuits(user_id, kind).await?;
    Ok(Json(tuits))
}
