//! Authentication extractors
//!
//! Session tokens ride in the Authorization header as bearer tokens. The
//! extractors resolve them against the session store; routes that accept
//! the `me` placeholder use [`OptionalAuthUser`] so that anonymous requests
//! with concrete ids still pass.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tuiter_core::Snowflake;
use tuiter_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from a session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID that owns the session
    pub user_id: Snowflake,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

/// Optional authenticated user
///
/// Returns None if no authorization header is present, or an error if the
/// presented token does not map to a live session.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The session identity, if one was presented
    pub fn user_id(&self) -> Option<Snowflake> {
        self.0.as_ref().map(|auth| auth.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Try to extract the Authorization header
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);

                // Look the token up in the session store
                let session = AuthService::new(app_state.service_context())
                    .authenticate(bearer.token())
                    .await
                    .map_err(|e| {
                        tracing::warn!(error = %e, "Rejected session token");
                        ApiError::Service(e)
                    })?;

                Ok(OptionalAuthUser(Some(AuthUser::new(session.user_id))))
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}

/// Raw bearer token from the Authorization header
///
/// Used by the auth endpoints that operate on the token itself rather
/// than on the identity behind it.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        Ok(BearerToken(bearer.token().to_string()))
    }
}
