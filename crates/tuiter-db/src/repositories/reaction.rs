//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tuiter_core::entities::{Reaction, ReactionKind, Tuit, User};
use tuiter_core::traits::{ReactionRepository, RepoResult};
use tuiter_core::value_objects::Snowflake;

use crate::models::{ReactionModel, TuitModel, UserModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        user_id: Snowflake,
        tuit_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT user_id, tuit_id, kind, created_at
            FROM reactions
            WHERE user_id = $1 AND tuit_id = $2 AND kind = $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(tuit_id.into_inner())
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_reactors(&self, tuit_id: Snowflake, kind: ReactionKind) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.first_name, u.last_name,
                   u.profile_photo, u.header_image, u.biography, u.date_of_birth,
                   u.account_type, u.marital_status, u.latitude, u.longitude, u.joined_at
            FROM users u
            INNER JOIN reactions r ON r.user_id = u.id
            WHERE r.tuit_id = $1 AND r.kind = $2
            ORDER BY r.created_at
            "#,
        )
        .bind(tuit_id.into_inner())
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_reacted_tuits(
        &self,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<Vec<Tuit>> {
        // INNER JOIN drops edges whose tuit has been deleted, so a stale
        // edge never surfaces as a hole in the listing.
        let results = sqlx::query_as::<_, TuitModel>(
            r#"
            SELECT t.id, t.posted_by, t.tuit, t.posted_on, t.replies, t.retuits,
                   t.likes, t.dislikes
            FROM tuits t
            INNER JOIN reactions r ON r.tuit_id = t.id
            WHERE r.user_id = $1 AND r.kind = $2
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(user_id.into_inner())
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tuit::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<bool> {
        // ON CONFLICT DO NOTHING makes a duplicate insert report zero rows,
        // which is how the caller learns its toggle lost the race.
        let result = sqlx::query(
            r#"
            INSERT INTO reactions (user_id, tuit_id, kind, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, tuit_id, kind) DO NOTHING
            "#,
        )
        .bind(reaction.user_id.into_inner())
        .bind(reaction.tuit_id.into_inner())
        .bind(reaction.kind.as_str())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        user_id: Snowflake,
        tuit_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions WHERE user_id = $1 AND tuit_id = $2 AND kind = $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(tuit_id.into_inner())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, tuit_id: Snowflake, kind: ReactionKind) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reactions WHERE tuit_id = $1 AND kind = $2
            "#,
        )
        .bind(tuit_id.into_inner())
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
