//! User service
//!
//! Profile CRUD. Usernames are fixed at signup; profile updates may touch
//! everything else except the password hash, which never leaves the
//! credentials path.

use tracing::{info, instrument};
use tuiter_core::entities::{AccountType, GeoLocation, MaritalStatus, User};
use tuiter_core::{DomainError, Snowflake};

use tuiter_common::auth::hash_password;

use crate::dto::{SignupRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a user without opening a session
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create(&self, request: SignupRequest) -> ServiceResult<UserResponse> {
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

        let user = User::new(self.ctx.generate_id(), request.username, request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User created");

        Ok(UserResponse::from(&user))
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get one user by id
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound(user_id)))?;
        Ok(UserResponse::from(&user))
    }

    /// Apply a partial profile update. Absent fields stay untouched.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound(user_id)))?;

        if let Some(email) = request.email {
            if email != user.email && self.ctx.user_repo().email_exists(&email).await? {
                return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
            }
            user.email = email;
        }
        if let Some(first_name) = request.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = request.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(profile_photo) = request.profile_photo {
            user.profile_photo = Some(profile_photo);
        }
        if let Some(header_image) = request.header_image {
            user.header_image = Some(header_image);
        }
        if let Some(biography) = request.biography {
            user.biography = Some(biography);
        }
        if let Some(date_of_birth) = request.date_of_birth {
            user.date_of_birth = Some(date_of_birth);
        }
        if let Some(account_type) = request.account_type.as_deref() {
            user.account_type = AccountType::parse(account_type);
        }
        if let Some(marital_status) = request.marital_status.as_deref() {
            user.marital_status = MaritalStatus::parse(marital_status);
        }
        if let Some(location) = request.location {
            user.location = Some(GeoLocation {
                latitude: location.latitude,
                longitude: location.longitude,
            });
        }

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "User profile updated");

        Ok(UserResponse::from(&user))
    }

    /// Delete a user and revoke every session they hold
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake) -> ServiceResult<()> {
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::Domain(DomainError::UserNotFound(user_id)));
        }

        self.ctx.user_repo().delete(user_id).await?;
        let revoked = self.ctx.session_store().delete_all(user_id).await?;

        info!(user_id = %user_id, revoked, "User deleted");

        Ok(())
    }
}
