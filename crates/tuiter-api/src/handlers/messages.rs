//! Direct message handlers
//!
//! Endpoints for one-to-one messages and recipient-list broadcasts.

use axum::{
    extract::{Path, State},
    Json,
};
use tuiter_core::UserRef;
use tuiter_service::{
    BroadcastMessageRequest, MessageResponse, MessageService, SendMessageRequest,
    UpdateMessageRequest,
};

use crate::extractors::{OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Send a direct message
///
/// POST /users/{uid}/messages/{ruid}
pub async fn send_message(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path((uid, ruid)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let sender_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;
    let recipient_id = ruid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?;

    let service = MessageService::new(state.service_context());
    let response = service.send(sender_id, recipient_id, request).await?;
    Ok(Created(Json(response)))
}

/// Send one message to each listed recipient
///
/// POST /users/{uid}/messages
pub async fn broadcast_message(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(uid): Path<String>,
    ValidatedJson(request): ValidatedJson<BroadcastMessageRequest>,
) -> ApiResult<Created<Json<Vec<MessageResponse>>>> {
    let sender_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;

    let service = MessageService::new(state.service_context());
    let sent = service.broadcast(sender_id, request).await?;
    Ok(Created(Json(sent)))
}

/// Messages sent from the user to the recipient, oldest first
///
/// GET /users/{uid}/messages/{ruid}
pub async fn get_conversation(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path((uid, ruid)): Path<(String, String)>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let sender_id = uid
        .parse::<UserRef>()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?
        .resolve(auth.user_id())?;
    let recipient_id = ruid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))?;

    let service = MessageService::new(state.service_context());
    let messages = service.conversation(sender_id, recipient_id).await?;
    Ok(Json(messages))
}

/// Get a message by id
///
/// GET /messages/{mid}
pub async fn get_message(
    State(state): State<AppState>,
    Path(mid): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let message_id = mid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid message id format"))?;

    let service = MessageService::new(state.service_context());
    let response = service.get(message_id).await?;
    Ok(Json(response))
}

/// Edit a message's text or pinned flag
///
/// PUT /messages/{mid}
pub async fn update_message(
    State(state): State<AppState>,
    Path(mid): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMessageRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let message_id = mid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid message id format"))?;

    let service = MessageService::new(state.service_context());
    let response = service.update(message_id, request).await?;
    Ok(Json(response))
}

/// Delete a message
///
/// DELETE /messages/{mid}
pub async fn delete_message(
    State(state): State<AppState>,
    Path(mid): Path<String>,
) -> ApiResult<NoContent> {
    let message_id = mid
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid message id format"))?;

    let service = MessageService::new(state.service_context());
    service.delete(message_id).await?;
    Ok(NoContent)
}
