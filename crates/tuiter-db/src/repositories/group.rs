//! PostgreSQL implementation of GroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tuiter_core::entities::Group;
use tuiter_core::error::DomainError;
use tuiter_core::traits::{GroupRepository, RepoResult};
use tuiter_core::value_objects::Snowflake;

use crate::mappers::group_with_members;
use crate::models::GroupModel;

use super::error::{group_not_found, map_db_error};

/// PostgreSQL implementation of GroupRepository
#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load member IDs for a group
    async fn load_member_ids(&self, group_id: i64) -> Result<Vec<i64>, DomainError> {
        let member_ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id FROM group_members WHERE group_id = $1
            ",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(member_ids)
    }

    /// Replace the member list for a group
    async fn replace_members(&self, group_id: i64, member_ids: &[i64]) -> Result<(), DomainError> {
        sqlx::query(
            r"
            DELETE FROM group_members WHERE group_id = $1
            ",
        )
        .bind(group_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if !member_ids.is_empty() {
            sqlx::query(
                r"
                INSERT INTO group_members (group_id, user_id)
                SELECT $1, UNNEST($2::BIGINT[])
                ON CONFLICT (group_id, user_id) DO NOTHING
                ",
            )
            .bind(group_id)
            .bind(member_ids)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        }

        Ok(())
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r"
            SELECT id, name, owner, created_on
            FROM groups
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let member_ids = self.load_member_ids(model.id).await?;
                Ok(Some(group_with_members(model, member_ids)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, user_id: Snowflake) -> RepoResult<Vec<Group>> {
        let results = sqlx::query_as::<_, GroupModel>(
            r"
            SELECT g.id, g.name, g.owner, g.created_on
            FROM groups g
            INNER JOIN group_members m ON m.group_id = g.id
            WHERE m.user_id = $1
            ORDER BY g.created_on DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut groups = Vec::with_capacity(results.len());
        for model in results {
            let member_ids = self.load_member_ids(model.id).await?;
            groups.push(group_with_members(model, member_ids));
        }

        Ok(groups)
    }

    #[instrument(skip(self))]
    async fn is_member(&self, group_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM group_members WHERE group_id = $1 AND user_id = $2)
            ",
        )
        .bind(group_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, group: &Group) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO groups (id, name, owner, created_on)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(group.id.into_inner())
        .bind(&group.name)
        .bind(group.owner.into_inner())
        .bind(group.created_on)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let member_ids: Vec<i64> = group.members.iter().map(|s| s.into_inner()).collect();
        self.replace_members(group.id.into_inner(), &member_ids)
            .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, group: &Group) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE groups
            SET name = $2
            WHERE id = $1
            ",
        )
        .bind(group.id.into_inner())
        .bind(&group.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(group_not_found(group.id));
        }

        let member_ids: Vec<i64> = group.members.iter().map(|s| s.into_inner()).collect();
        self.replace_members(group.id.into_inner(), &member_ids)
            .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM group_members WHERE group_id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM groups WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(group_not_found(id));
        }

        Ok(())
    }
}
