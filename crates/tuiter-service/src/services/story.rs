//! Story service
//!
//! Ephemeral media posts with an optional viewer allow-list. An empty
//! viewer list makes a story public. Listings accept an optional hours
//! window, everything older drops out.

use tracing::{info, instrument};
use tuiter_core::entities::Story;
use tuiter_core::{DomainError, Snowflake};

use crate::dto::{CreateStoryRequest, StoryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Story service
pub struct StoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StoryService<'a> {
    /// Create a new StoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a story as `author_id`
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        request: CreateStoryRequest,
    ) -> ServiceResult<StoryResponse> {
        if self.ctx.user_repo().find_by_id(author_id).await?.is_none() {
            return Err(ServiceError::Domain(DomainError::UserNotFound(author_id)));
        }

        let mut story = Story::new(self.ctx.generate_id(), author_id, request.image);
        story.description = request.description;
        story.viewers = request.viewers;

        self.ctx.story_repo().create(&story).await?;

        info!(
            story_id = %story.id,
            author_id = %author_id,
            public = story.is_public(),
            "Story posted"
        );

        Ok(StoryResponse::from(&story))
    }

    /// All stories, optionally only those posted within the last `hours`
    #[instrument(skip(self))]
    pub async fn list_all(&self, hours: Option<i64>) -> ServiceResult<Vec<StoryResponse>> {
        let stories = self.ctx.story_repo().find_all().await?;
        Ok(Self::within_window(stories, hours))
    }

    /// Stories the user may view: public ones, those naming the user as a
    /// viewer, and the user's own
    #[instrument(skip(self))]
    pub async fn visible_to(
        &self,
        user_id: Snowflake,
        hours: Option<i64>,
    ) -> ServiceResult<Vec<StoryResponse>> {
        let stories = self.ctx.story_repo().find_visible_to(user_id).await?;
        Ok(Self::within_window(stories, hours))
    }

    /// Stories authored by the user
    #[instrument(skip(self))]
    pub async fn authored_by(&self, user_id: Snowflake) -> ServiceResult<Vec<StoryResponse>> {
        let stories = self.ctx.story_repo().find_by_author(user_id).await?;
        Ok(stories.iter().map(StoryResponse::from).collect())
    }

    /// Get one story by id
    #[instrument(skip(self))]
    pub async fn get(&self, story_id: Snowflake) -> ServiceResult<StoryResponse> {
        let story = self
            .ctx
            .story_repo()
            .find_by_id(story_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::StoryNotFound(story_id)))?;
        Ok(StoryResponse::from(&story))
    }

    /// Delete a story
    #[instrument(skip(self))]
    pub async fn delete(&self, story_id: Snowflake) -> ServiceResult<()> {
        if self
            .ctx
            .story_repo()
            .find_by_id(story_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::Domain(DomainError::StoryNotFound(story_id)));
        }

        self.ctx.story_repo().delete(story_id).await?;

        info!(story_id = %story_id, "Story deleted");

        Ok(())
    }

    /// Delete every story the user authored, returning how many went
    #[instrument(skip(self))]
    pub async fn delete_all_by_author(&self, user_id: Snowflake) -> ServiceResult<u64> {
        let deleted = self.ctx.story_repo().delete_by_author(user_id).await?;
        info!(user_id = %user_id, deleted, "Author stories deleted");
        Ok(deleted)
    }

    fn within_window(stories: Vec<Story>, hours: Option<i64>) -> Vec<StoryResponse> {
        stories
            .iter()
            .filter(|s| hours.is_none_or(|h| s.posted_within(h)))
            .map(StoryResponse::from)
            .collect()
    }
}
