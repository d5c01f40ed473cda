//! PostgreSQL implementation of StoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tuiter_core::entities::Story;
use tuiter_core::error::DomainError;
use tuiter_core::traits::{RepoResult, StoryRepository};
use tuiter_core::value_objects::Snowflake;

use crate::mappers::story_with_viewers;
use crate::models::StoryModel;

use super::error::{map_db_error, story_not_found};

/// PostgreSQL implementation of StoryRepository
#[derive(Clone)]
pub struct PgStoryRepository {
    pool: PgPool,
}

impl PgStoryRepository {
    /// Create a new PgStoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load viewer IDs for a story
    async fn load_viewer_ids(&self, story_id: i64) -> Result<Vec<i64>, DomainError> {
        let viewer_ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT viewer_id FROM story_viewers WHERE story_id = $1
            ",
        )
        .bind(story_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(viewer_ids)
    }

    /// Assemble entities for a batch of story rows
    async fn with_viewers(&self, models: Vec<StoryModel>) -> RepoResult<Vec<Story>> {
        let mut stories = Vec::with_capacity(models.len());
        for model in models {
            let viewer_ids = self.load_viewer_ids(model.id).await?;
            stories.push(story_with_viewers(model, viewer_ids));
        }

        Ok(stories)
    }
}

#[async_trait]
impl StoryRepository for PgStoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Story>> {
        let result = sqlx::query_as::<_, StoryModel>(
            r"
            SELECT id, posted_by, image, description, posted_on
            FROM stories
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let viewer_ids = self.load_viewer_ids(model.id).await?;
                Ok(Some(story_with_viewers(model, viewer_ids)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Story>> {
        let results = sqlx::query_as::<_, StoryModel>(
            r"
            SELECT id, posted_by, image, description, posted_on
            FROM stories
            ORDER BY posted_on DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.with_viewers(results).await
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, user_id: Snowflake) -> RepoResult<Vec<Story>> {
        let results = sqlx::query_as::<_, StoryModel>(
            r"
            SELECT id, posted_by, image, description, posted_on
            FROM stories
            WHERE posted_by = $1
            ORDER BY posted_on DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.with_viewers(results).await
    }

    #[instrument(skip(self))]
    async fn find_visible_to(&self, user_id: Snowflake) -> RepoResult<Vec<Story>> {
        // A story with no viewer rows is public. Otherwise the user must
        // be the author or named in the allow-list.
        let results = sqlx::query_as::<_, StoryModel>(
            r"
            SELECT s.id, s.posted_by, s.image, s.description, s.posted_on
            FROM stories s
            WHERE s.posted_by = $1
               OR NOT EXISTS (SELECT 1 FROM story_viewers v WHERE v.story_id = s.id)
               OR EXISTS (
                   SELECT 1 FROM story_viewers v
                   WHERE v.story_id = s.id AND v.viewer_id = $1
               )
            ORDER BY s.posted_on DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.with_viewers(results).await
    }

    #[instrument(skip(self))]
    async fn create(&self, story: &Story) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO stories (id, posted_by, image, description, posted_on)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(story.id.into_inner())
        .bind(story.posted_by.into_inner())
        .bind(&story.image)
        .bind(&story.description)
        .bind(story.posted_on)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if !story.viewers.is_empty() {
            let viewer_ids: Vec<i64> = story.viewers.iter().map(|s| s.into_inner()).collect();

            sqlx::query(
                r"
                INSERT INTO story_viewers (story_id, viewer_id)
                SELECT $1, UNNEST($2::BIGINT[])
                ON CONFLICT (story_id, viewer_id) DO NOTHING
                ",
            )
            .bind(story.id.into_inner())
            .bind(&viewer_ids)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM story_viewers WHERE story_id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM stories WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(story_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_author(&self, user_id: Snowflake) -> RepoResult<u64> {
        sqlx::query(
            r"
            DELETE FROM story_viewers
            WHERE story_id IN (SELECT id FROM stories WHERE posted_by = $1)
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM stories WHERE posted_by = $1
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
