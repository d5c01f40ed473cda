//! Bookmark service
//!
//! Saved-tuit edges between users and tuits.

use tracing::{info, instrument};
use tuiter_core::entities::Bookmark;
use tuiter_core::{DomainError, Snowflake};

use crate::dto::{TuitResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Bookmark service
pub struct BookmarkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookmarkService<'a> {
    /// Create a new BookmarkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Bookmark a tuit for a user
    #[instrument(skip(self))]
    pub async fn bookmark(&self, user_id: Snowflake, tuit_id: Snowflake) -> ServiceResult<()> {
        if self.ctx.tuit_repo().find_by_id(tuit_id).await?.is_none() {
            return Err(ServiceError::Domain(DomainError::TuitNotFound(tuit_id)));
        }

        let bookmark = Bookmark::new(user_id, tuit_id);
        if !self.ctx.bookmark_repo().create(&bookmark).await? {
            return Err(ServiceError::Domain(DomainError::AlreadyBookmarked));
        }

        info!(user_id = %user_id, tuit_id = %tuit_id, "Tuit bookmarked");

        Ok(())
    }

    /// Remove a bookmark. Removing one that does not exist is a no-op.
    #[instrument(skip(self))]
    pub async fn unbookmark(&self, user_id: Snowflake, tuit_id: Snowflake) -> ServiceResult<()> {
        if self.ctx.bookmark_repo().delete(user_id, tuit_id).await? {
            info!(user_id = %user_id, tuit_id = %tuit_id, "Bookmark removed");
        }
        Ok(())
    }

    /// Tuits the user bookmarked. Bookmarks whose tuit has been deleted
    /// are filtered out by the store.
    #[instrument(skip(self))]
    pub async fn tuits_of(&self, user_id: Snowflake) -> ServiceResult<Vec<TuitResponse>> {
        let tuits = self.ctx.bookmark_repo().find_tuits_by_user(user_id).await?;
        Ok(tuits.iter().map(TuitResponse::from).collect())
    }

    /// Users who bookmarked the tuit
    #[instrument(skip(self))]
    pub async fn users_of(&self, tuit_id: Snowflake) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.bookmark_repo().find_users_by_tuit(tuit_id).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }
}
