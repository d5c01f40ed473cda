//! Group handlers
//!
//! Endpoints for group CRUD. Member-list edits always keep the owner in
//! the group.

use axum::{
    extract::{Path, State},
    Json,
};
use tuiter_core::UserRef;
use tuiter_service::{CreateGroupRequest, GroupResponse, GroupService, UpdateGroupRequest};

use crate::extractors::{OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a group owned by the user
///
/// POST /users/{uid}/groups
pub async fn create_group(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateGroupRequest>,
) -> ApiResult<Created<Json<GroupResponse>>> {
    let owner_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = GroupService::new(state.service_context());
    let response = service.create(owner_id, request).await?;
    Ok(Created(Json(response)))
}

/// Groups the user belongs to
///
/// GET /users/{uid}/groups
pub async fn list_user_groups(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = GroupService::new(state.service_context());
    let groups = service.groups_of(user_id).await?;
    Ok(Json(groups))
}

/// Get a group by id
///
/// GET /groups/{gid}
pub async fn get_group(
    State(state): State<AppState>,
    Path(gid): Path<String>,
) -> ApiResult<Json<GroupResponse>> {
    let group_id = gid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group id format"))?;

    let service = GroupService::new(state.service_context());
    let response = service.get(group_id).await?;
    Ok(Json(response))
}

/// Rename a group or replace its member list
///
/// PUT /groups/{gid}
pub async fn update_group(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGroupRequest>,
) -> ApiResult<Json<GroupResponse>> {
    let group_id = gid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group id format"))?;

    let service = GroupService::new(state.service_context());
    let response = service.update(group_id, request).await?;
    Ok(Json(response))
}

/// Delete a group
///
/// DELETE /groups/{gid}
pub async fn delete_group(
    State(state): State<AppState>,
    Path(gid): Path<String>,
) -> ApiResult<NoContent> {
    let group_id = gid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group id format"))?;

    let service = GroupService::new(state.service_context());
    service.delete(group_id).await?;
    Ok(NoContent)
}
