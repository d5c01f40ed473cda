//! Group message handlers
//!
//! Endpoints for messages inside a group. Sending requires membership.

use axum::{
    extract::{Path, State},
    Json,
};
use tuiter_core::UserRef;
use tuiter_service::{GroupMessageResponse, GroupMessageService, SendGroupMessageRequest};

use crate::extractors::{OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Send a message to the group
///
/// POST /groups/{gid}/users/{uid}/messages
pub async fn send_group_message(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path((gid, uid)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<SendGroupMessageRequest>,
) -> ApiResult<Created<Json<GroupMessageResponse>>> {
    let group_id = gid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group id format"))?;
    let sender_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = GroupMessageService::new(state.service_context());
    let response = service.send(group_id, sender_id, request).await?;
    Ok(Created(Json(response)))
}

/// Messages sent to the group, oldest first
///
/// GET /groups/{gid}/messages
pub async fn list_group_messages(
    State(state): State<AppState>,
    Path(gid): Path<String>,
) -> ApiResult<Json<Vec<GroupMessageResponse>>> {
    let group_id = gid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group id format"))?;

    let service = GroupMessageService::new(state.service_context());
    let messages = service.list(group_id).await?;
    Ok(Json(messages))
}

/// Get one group message
///
/// GET /groups/{gid}/messages/{mid}
pub async fn get_group_message(
    State(state): State<AppState>,
    Path((gid, mid)): Path<(String, String)>,
) -> ApiResult<Json<GroupMessageResponse>> {
    let group_id = gid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group id format"))?;
    let message_id = mid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid message id format"))?;

    let service = GroupMessageService::new(state.service_context());
    let response = service.get(group_id, message_id).await?;
    Ok(Json(response))
}

/// Delete a group message
///
/// DELETE /groups/{gid}/messages/{mid}
pub async fn delete_group_message(
    State(state): State<AppState>,
    Path((gid, mid)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let group_id = gid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group id format"))?;
    let message_id = mid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid message id format"))?;

    let service = GroupMessageService::new(state.service_context());
    service.delete(group_id, message_id).await?;
    Ok(NoContent)
}
