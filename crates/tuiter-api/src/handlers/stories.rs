//! Story handlers
//!
//! Endpoints for ephemeral stories. List routes accept an optional
//! `?hours=N` window over the posting time.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tuiter_core::UserRef;
use tuiter_service::{CreateStoryRequest, DeletedResponse, StoryResponse, StoryService};

use crate::extractors::{OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for story listings
#[derive(Debug, Default, Deserialize)]
pub struct StoryWindowQuery {
    /// Only stories posted within the last N hours
    #[serde(default)]
    pub hours: Option<String>,
}

impl StoryWindowQuery {
    fn hours(&self) -> Result<Option<i64>, ApiError> {
        self.hours
            .as_deref()
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'hours' format"))
            })
            .transpose()
    }
}

/// Post a new story
///
/// POST /users/{uid}/stories
pub async fn create_story(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateStoryRequest>,
) -> ApiResult<Created<Json<StoryResponse>>> {
    let author_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = StoryService::new(state.service_context());
    let response = service.create(author_id, request).await?;
    Ok(Created(Json(response)))
}

/// All stories, optionally windowed
///
/// GET /stories
pub async fn list_stories(
    State(state): State<AppState>,
    Query(query): Query<StoryWindowQuery>,
) -> ApiResult<Json<Vec<StoryResponse>>> {
    let hours = query.hours()?;

    let service = StoryService::new(state.service_context());
    let stories = service.list_all(hours).await?;
    Ok(Json(stories))
}

/// Stories visible to the user: public ones plus those listing them
///
/// GET /users/{uid}/stories
pub async fn list_visible_stories(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
    Query(query): Query<StoryWindowQuery>,
) -> ApiResult<Json<Vec<StoryResponse>>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;
    let hours = query.hours()?;

    let service = StoryService::new(state.service_context());
    let stories = service.visible_to(user_id, hours).await?;
    Ok(Json(stories))
}

/// Stories the user authored
///
/// GET /users/{uid}/my-stories
pub async fn list_my_stories(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<Vec<StoryResponse>>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = StoryService::new(state.service_context());
    let stories = service.authored_by(user_id).await?;
    Ok(Json(stories))
}

/// Get a story by id
///
/// GET /stories/{sid}
pub async fn get_story(
    State(state): State<AppState>,
    Path(sid): Path<String>,
) -> ApiResult<Json<StoryResponse>> {
    let story_id = sid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid story id format"))?;

    let service = StoryService::new(state.service_context());
    let response = service.get(story_id).await?;
    Ok(Json(response))
}

/// Delete a story
///
/// DELETE /stories/{sid}
pub async fn delete_story(
    State(state): State<AppState>,
    Path(sid): Path<String>,
) -> ApiResult<NoContent> {
    let story_id = sid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid story id format"))?;

    let service = StoryService::new(state.service_context());
    service.delete(story_id).await?;
    Ok(NoContent)
}

/// Delete every story the user authored
///
/// DELETE /users/{uid}/stories
pub async fn delete_user_stories(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let user_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = StoryService::new(state.service_context());
    let deleted = service.delete_all_by_author(user_id).await?;
    Ok(Json(DeletedResponse { deleted }))
}
