//! Tuit handlers
//!
//! Endpoints for posting and managing tuits.

use axum::{
    extract::{Path, State},
    Json,
};
use tuiter_core::UserRef;
use tuiter_service::{CreateTuitRequest, TuitResponse, TuitService, UpdateTuitRequest};

use crate::extractors::{OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Post a new tuit
///
/// POST /users/{uid}/tuits
pub async fn create_tuit(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateTuitRequest>,
) -> ApiResult<Created<Json<TuitResponse>>> {
    let author_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = TuitService::new(state.service_context());
    let response = service.create(author_id, request).await?;
    Ok(Created(Json(response)))
}

/// List all tuits
///
/// GET /tuits
pub async fn list_tuits(State(state): State<AppState>) -> ApiResult<Json<Vec<TuitResponse>>> {
    let service = TuitService::new(state.service_context());
    let tuits = service.list().await?;
    Ok(Json(tuits))
}

/// Get a tuit by id
///
/// GET /tuits/{tid}
pub async fn get_tuit(
    State(state): State<AppState>,
    Path(tid): Path<String>,
) -> ApiResult<Json<TuitResponse>> {
    let tuit_id = tid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid tuit id format"))?;

    let service = TuitService::new(state.service_context());
    let response = service.get(tuit_id).await?;
    Ok(Json(response))
}

/// Tuits authored by a user
///
/// GET /users/{uid}/tuits
pub async fn list_user_tuits(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<Vec<TuitResponse>>> {
    let author_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = TuitService::new(state.service_context());
    let tuits = service.list_by_author(author_id).await?;
    Ok(Json(tuits))
}

/// Edit a tuit's text
///
/// PUT /tuits/{tid}
pub async fn update_tuit(
    State(state): State<AppState>,
    Path(tid): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTuitRequest>,
) -> ApiResult<Json<TuitResponse>> {
    let tuit_id = tid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid tuit id format"))?;

    let service = TuitService::new(state.service_context());
    let response = service.update(tuit_id, request).await?;
    Ok(Json(response))
}

/// Delete a tuit
///
/// DELETE /tuits/{tid}
pub async fn delete_tuit(
    State(state): State<AppState>,
    Path(tid): Path<String>,
) -> ApiResult<NoContent> {
    let tuit_id = tid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid tuit id format"))?;

    let service = TuitService::new(state.service_context());
    service.delete(tuit_id).await?;
    Ok(NoContent)
}
