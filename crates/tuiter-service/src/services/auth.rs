//! Authentication service
//!
//! Handles signup, login, logout, and session-backed profile lookup.
//! Sessions are opaque UUID tokens living in the session store; the token
//! is the only credential a client holds after login.

use tracing::{info, instrument, warn};
use tuiter_core::entities::User;
use tuiter_core::{DomainError, Session};
use uuid::Uuid;

use tuiter_common::auth::{hash_password, verify_password};

use crate::dto::{AuthResponse, LoginRequest, SignupRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and open a session for them
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::Domain(DomainError::UsernameAlreadyExists));
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.username, request.email);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered");

        let token = self.open_session(&user).await?;

        Ok(AuthResponse::new(token, UserResponse::from(&user)))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: unknown username");
                ServiceError::Domain(DomainError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash on record");
                ServiceError::Domain(DomainError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ServiceError::Domain(DomainError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");

        let token = self.open_session(&user).await?;

        Ok(AuthResponse::new(token, UserResponse::from(&user)))
    }

    /// Destroy the presented session. Unknown tokens are a no-op so that
    /// logout stays idempotent.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> ServiceResult<()> {
        if let Some(session) = self.ctx.session_store().get(token).await? {
            info!(user_id = %session.user_id, "User logged out");
        }
        self.ctx.session_store().delete(token).await?;
        Ok(())
    }

    /// Look up the session for a bearer token.
    ///
    /// An unknown or expired token surfaces as an unresolvable identity.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<Session> {
        self.ctx
            .session_store()
            .get(token)
            .await?
            .ok_or(ServiceError::Domain(DomainError::IdentityUnresolvable))
    }

    /// Return the profile of the session user
    #[instrument(skip(self, token))]
    pub async fn profile(&self, token: &str) -> ServiceResult<UserResponse> {
        let session = self.authenticate(token).await?;

        // A session can outlive its user row; treat that as a dead session.
        let user = self
            .ctx
            .user_repo()
            .find_by_id(session.user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::IdentityUnresolvable))?;

        Ok(UserResponse::from(&user))
    }

    /// Mint an opaque token and persist the session under it
    async fn open_session(&self, user: &User) -> ServiceResult<String> {
        let token = Uuid::new_v4().to_string();
        let session = Session::new(user.id, user.username.clone());
        self.ctx.session_store().put(&token, &session).await?;
        Ok(token)
    }
}
