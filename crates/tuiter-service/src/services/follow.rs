//! Follow service
//!
//! Follower/following edges between users.

use tracing::{info, instrument};
use tuiter_core::entities::Follow;
use tuiter_core::{DomainError, Snowflake};

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// `user_id` starts following `other_id`
    #[instrument(skip(self))]
    pub async fn follow(&self, user_id: Snowflake, other_id: Snowflake) -> ServiceResult<()> {
        let follow = Follow::new(user_id, other_id);
        if follow.is_self_follow() {
            return Err(ServiceError::Domain(DomainError::SelfFollow));
        }

        if self.ctx.user_repo().find_by_id(other_id).await?.is_none() {
            return Err(ServiceError::Domain(DomainError::UserNotFound(other_id)));
        }

        if !self.ctx.follow_repo().create(&follow).await? {
            return Err(ServiceError::Domain(DomainError::AlreadyFollowing));
        }

        info!(user_id = %user_id, followed = %other_id, "Follow created");

        Ok(())
    }

    /// `user_id` stops following `other_id`. Removing an edge that does
    /// not exist is a no-op.
    #[instrument(skip(self))]
    pub async fn unfollow(&self, user_id: Snowflake, other_id: Snowflake) -> ServiceResult<()> {
        if self.ctx.follow_repo().delete(user_id, other_id).await? {
            info!(user_id = %user_id, unfollowed = %other_id, "Follow removed");
        }
        Ok(())
    }

    /// Users that `user_id` follows
    #[instrument(skip(self))]
    pub async fn following(&self, user_id: Snowflake) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.follow_repo().find_following(user_id).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Users following `user_id`
    #[instrument(skip(self))]
    pub async fn followers(&self, user_id: Snowflake) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.follow_repo().find_followers(user_id).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }
}
