//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tuiter_core::entities::{Follow, User};
use tuiter_core::traits::{FollowRepository, RepoResult};
use tuiter_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn create(&self, follow: &Follow) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO follows (user_following, user_followed, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_following, user_followed) DO NOTHING
            ",
        )
        .bind(follow.user_following.into_inner())
        .bind(follow.user_followed.into_inner())
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        user_following: Snowflake,
        user_followed: Snowflake,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM follows WHERE user_following = $1 AND user_followed = $2
            ",
        )
        .bind(user_following.into_inner())
        .bind(user_followed.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_following(&self, user_id: Snowflake) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.username, u.email, u.password_hash, u.first_name, u.last_name,
                   u.profile_photo, u.header_image, u.biography, u.date_of_birth,
                   u.account_type, u.marital_status, u.latitude, u.longitude, u.joined_at
            FROM users u
            INNER JOIN follows f ON f.user_followed = u.id
            WHERE f.user_following = $1
            ORDER BY f.created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_followers(&self, user_id: Snowflake) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.username, u.email, u.password_hash, u.first_name, u.last_name,
                   u.profile_photo, u.header_image, u.biography, u.date_of_birth,
                   u.account_type, u.marital_status, u.latitude, u.longitude, u.joined_at
            FROM users u
            INNER JOIN follows f ON f.user_following = u.id
            WHERE f.user_followed = $1
            ORDER BY f.created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}
