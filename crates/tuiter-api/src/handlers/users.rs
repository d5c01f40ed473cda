//! User handlers
//!
//! Endpoints for account CRUD. Routes taking `{uid}` accept the `me`
//! placeholder, resolved against the presented session.

use axum::{
    extract::{Path, State},
    Json,
};
use tuiter_core::UserRef;
use tuiter_service::{SignupRequest, UpdateUserRequest, UserResponse, UserService};

use crate::extractors::{OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a user without opening a session
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// List all users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list().await?;
    Ok(Json(users))
}

/// Get a user by id
///
/// GET /users/{uid}
pub async fn get_user(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = UserService::new(state.service_context());
    let response = service.get(user_id).await?;
    Ok(Json(response))
}

/// Update a user's profile
///
/// PUT /users/{uid}
pub async fn update_user(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = UserService::new(state.service_context());
    let response = service.update(user_id, request).await?;
    Ok(Json(response))
}

/// Delete a user
///
/// DELETE /users/{uid}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<NoContent> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = UserService::new(state.service_context());
    service.delete(user_id).await?;
    Ok(NoContent)
}
