//! Tuit service
//!
//! Posting, listing, editing, and deleting tuits. Engagement counters on
//! a tuit are owned by the engagement service and never mutated here.

use tracing::{info, instrument};
use tuiter_core::entities::Tuit;
use tuiter_core::{DomainError, Snowflake};

use crate::dto::{CreateTuitRequest, TuitResponse, UpdateTuitRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Tuit service
pub struct TuitService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TuitService<'a> {
    /// Create a new TuitService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a new tuit as `author_id`
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        request: CreateTuitRequest,
    ) -> ServiceResult<TuitResponse> {
        if self.ctx.user_repo().find_by_id(author_id).await?.is_none() {
            return Err(ServiceError::Domain(DomainError::UserNotFound(author_id)));
        }

        let tuit = Tuit::new(self.ctx.generate_id(), author_id, request.tuit);
        self.ctx.tuit_repo().create(&tuit).await?;

        info!(tuit_id = %tuit.id, author_id = %author_id, "Tuit posted");

        Ok(TuitResponse::from(&tuit))
    }

    /// List all tuits, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TuitResponse>> {
        let tuits = self.ctx.tuit_repo().find_all().await?;
        Ok(tuits.iter().map(TuitResponse::from).collect())
    }

    /// Get one tuit by id
    #[instrument(skip(self))]
    pub async fn get(&self, tuit_id: Snowflake) -> ServiceResult<TuitResponse> {
        let tuit = self
            .ctx
            .tuit_repo()
            .find_by_id(tuit_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::TuitNotFound(tuit_id)))?;
        Ok(TuitResponse::from(&tuit))
    }

    /// List tuits posted by a user, newest first. An unknown author just
    /// yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_by_author(&self, author_id: Snowflake) -> ServiceResult<Vec<TuitResponse>> {
        let tuits = self.ctx.tuit_repo().find_by_author(author_id).await?;
        Ok(tuits.iter().map(TuitResponse::from).collect())
    }

    /// Replace the tuit body
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        tuit_id: Snowflake,
        request: UpdateTuitRequest,
    ) -> ServiceResult<TuitResponse> {
        let mut tuit = self
            .ctx
            .tuit_repo()
            .find_by_id(tuit_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::TuitNotFound(tuit_id)))?;

        tuit.edit(request.tuit);
        self.ctx.tuit_repo().update(&tuit).await?;

        info!(tuit_id = %tuit_id, "Tuit edited");

        Ok(TuitResponse::from(&tuit))
    }

    /// Delete a tuit. Reaction edges pointing at it become dangling and
    /// are filtered out by the reaction queries.
    #[instrument(skip(self))]
    pub async fn delete(&self, tuit_id: Snowflake) -> ServiceResult<()> {
        if self.ctx.tuit_repo().find_by_id(tuit_id).await?.is_none() {
            return Err(ServiceError::Domain(DomainError::TuitNotFound(tuit_id)));
        }

        self.ctx.tuit_repo().delete(tuit_id).await?;

        info!(tuit_id = %tuit_id, "Tuit deleted");

        Ok(())
    }
}
