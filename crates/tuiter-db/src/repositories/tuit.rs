//! PostgreSQL implementation of TuitRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tuiter_core::entities::{Tuit, TuitStats};
use tuiter_core::traits::{RepoResult, TuitRepository};
use tuiter_core::value_objects::Snowflake;

use crate::models::TuitModel;

use super::error::{map_db_error, tuit_not_found};

/// PostgreSQL implementation of TuitRepository
#[derive(Clone)]
pub struct PgTuitRepository {
    pool: PgPool,
}

impl PgTuitRepository {
    /// Create a new PgTuitRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TuitRepository for PgTuitRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Tuit>> {
        let result = sqlx::query_as::<_, TuitModel>(
            r"
            SELECT id, posted_by, tuit, posted_on, replies, retuits, likes, dislikes
            FROM tuits
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tuit::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Tuit>> {
        let results = sqlx::query_as::<_, TuitModel>(
            r"
            SELECT id, posted_by, tuit, posted_on, replies, retuits, likes, dislikes
            FROM tuits
            ORDER BY posted_on DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tuit::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, user_id: Snowflake) -> RepoResult<Vec<Tuit>> {
        let results = sqlx::query_as::<_, TuitModel>(
            r"
            SELECT id, posted_by, tuit, posted_on, replies, retuits, likes, dislikes
            FROM tuits
            WHERE posted_by = $1
            ORDER BY posted_on DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tuit::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, tuit: &Tuit) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tuits (id, posted_by, tuit, posted_on, replies, retuits, likes, dislikes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(tuit.id.into_inner())
        .bind(tuit.posted_by.into_inner())
        .bind(&tuit.tuit)
        .bind(tuit.posted_on)
        .bind(tuit.stats.replies)
        .bind(tuit.stats.retuits)
        .bind(tuit.stats.likes)
        .bind(tuit.stats.dislikes)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, tuit: &Tuit) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE tuits
            SET tuit = $2
            WHERE id = $1
            ",
        )
        .bind(tuit.id.into_inner())
        .bind(&tuit.tuit)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tuit_not_found(tuit.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM tuits WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tuit_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn apply_stats_delta(
        &self,
        id: Snowflake,
        likes_delta: i32,
        dislikes_delta: i32,
    ) -> RepoResult<()> {
        // Single conditional UPDATE so concurrent toggles compose at the
        // row lock instead of overwriting each other's counts. GREATEST
        // keeps a counter from going negative if an edge and its delta
        // ever disagree.
        let result = sqlx::query(
            r"
            UPDATE tuits
            SET likes = GREATEST(likes + $2, 0),
                dislikes = GREATEST(dislikes + $3, 0)
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(likes_delta)
        .bind(dislikes_delta)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tuit_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_stats(&self, id: Snowflake, stats: &TuitStats) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE tuits
            SET replies = $2, retuits = $3, likes = $4, dislikes = $5
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(stats.replies)
        .bind(stats.retuits)
        .bind(stats.likes)
        .bind(stats.dislikes)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(tuit_not_found(id));
        }

        Ok(())
    }
}
