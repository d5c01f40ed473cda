//! PostgreSQL implementation of BookmarkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tuiter_core::entities::{Bookmark, Tuit, User};
use tuiter_core::traits::{BookmarkRepository, RepoResult};
use tuiter_core::value_objects::Snowflake;

use crate::models::{TuitModel, UserModel};

use super::error::map_db_error;

/// PostgreSQL implementation of BookmarkRepository
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    /// Create a new PgBookmarkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    #[instrument(skip(self))]
    async fn create(&self, bookmark: &Bookmark) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO bookmarks (bookmarked_by, bookmarked_tuit, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (bookmarked_by, bookmarked_tuit) DO NOTHING
            ",
        )
        .bind(bookmark.bookmarked_by.into_inner())
        .bind(bookmark.bookmarked_tuit.into_inner())
        .bind(bookmark.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: Snowflake, tuit_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM bookmarks WHERE bookmarked_by = $1 AND bookmarked_tuit = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(tuit_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_tuits_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Tuit>> {
        // INNER JOIN drops bookmarks whose tuit has been deleted
        let results = sqlx::query_as::<_, TuitModel>(
            r"
            SELECT t.id, t.posted_by, t.tuit, t.posted_on, t.replies, t.retuits,
                   t.likes, t.dislikes
            FROM tuits t
            INNER JOIN bookmarks b ON b.bookmarked_tuit = t.id
            WHERE b.bookmarked_by = $1
            ORDER BY b.created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tuit::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_users_by_tuit(&self, tuit_id: Snowflake) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.username, u.email, u.password_hash, u.first_name, u.last_name,
                   u.profile_photo, u.header_image, u.biography, u.date_of_birth,
                   u.account_type, u.marital_status, u.latitude, u.longitude, u.joined_at
            FROM users u
            INNER JOIN bookmarks b ON b.bookmarked_by = u.id
            WHERE b.bookmarked_tuit = $1
            ORDER BY b.created_at DESC
            ",
        )
        .bind(tuit_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}
