//! Authentication handlers
//!
//! Endpoints for signup, login, logout, and session profile lookup.

use axum::{extract::State, Json};
use tuiter_service::{AuthResponse, AuthService, LoginRequest, SignupRequest, UserResponse};

use crate::extractors::{BearerToken, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new account and open a session
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Destroy the presented session
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.logout(&token).await?;
    Ok(NoContent)
}

/// Profile of the session owner
///
/// POST /auth/profile
pub async fn profile(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.profile(&token).await?;
    Ok(Json(response))
}
