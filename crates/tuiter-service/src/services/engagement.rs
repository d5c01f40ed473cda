//! Engagement service
//!
//! Owns the like/dislike toggles and keeps a tuit's cached counters in
//! lockstep with its reaction edges. The counters move only through
//! `apply_stats_delta`, with deltas derived from the edge rows a toggle
//! actually changed, so concurrent toggles compose instead of clobbering
//! each other. A crash between the edge write and the counter write can
//! leave skew; `rebuild_stats` recomputes from the edges.

use tracing::{info, instrument};
use tuiter_core::entities::{Reaction, ReactionKind, TuitStats};
use tuiter_core::{DomainError, Snowflake};

use crate::dto::{StatsResponse, TuitResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the `kind` edge for (user, tuit).
    ///
    /// Absent edge: insert it, and clear an opposite-kind edge if one
    /// exists. Present edge: remove it, leaving the opposite kind alone.
    /// Both counter deltas land in one atomic update.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        user_id: Snowflake,
        tuit_id: Snowflake,
        kind: ReactionKind,
    ) -> ServiceResult<()> {
        // Abort before any mutation when the tuit is gone.
        if self.ctx.tuit_repo().find_by_id(tuit_id).await?.is_none() {
            return Err(ServiceError::Domain(DomainError::TuitNotFound(tuit_id)));
        }

        let (kind_delta, opposite_delta) = if self
            .ctx
            .reaction_repo()
            .delete(user_id, tuit_id, kind)
            .await?
        {
            // The remove branch never touches the opposite kind.
            (-1, 0)
        } else {
            let inserted = self
                .ctx
                .reaction_repo()
                .create(&Reaction::new(user_id, tuit_id, kind))
                .await?;

            if inserted {
                let removed_opposite = self
                    .ctx
                    .reaction_repo()
                    .delete(user_id, tuit_id, kind.opposite())
                    .await?;
                (1, if removed_opposite { -1 } else { 0 })
            } else {
                // A concurrent identical toggle inserted first; its deltas
                // already account for the edge.
                (0, 0)
            }
        };

        let (likes_delta, dislikes_delta) = match kind {
            ReactionKind::Like => (kind_delta, opposite_delta),
            ReactionKind::Dislike => (opposite_delta, kind_delta),
        };

        if likes_delta != 0 || dislikes_delta != 0 {
            self.ctx
                .tuit_repo()
                .apply_stats_delta(tuit_id, likes_delta, dislikes_delta)
                .await?;
        }

        info!(
            user_id = %user_id,
            tuit_id = %tuit_id,
            kind = kind.as_str(),
            likes_delta,
            dislikes_delta,
            "Reaction toggled"
        );

        Ok(())
    }

    /// Users holding an edge of `kind` on the tuit
    #[instrument(skip(self))]
    pub async fn reactors(
        &self,
        tuit_id: Snowflake,
        kind: ReactionKind,
    ) -> ServiceResult<Vec<UserResponse>> {
        let users = self
            .ctx
            .reaction_repo()
            .find_reactors(tuit_id, kind)
            .await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Tuits the user reacted to with `kind`. Edges whose tuit has been
    /// deleted are filtered out by the store.
    #[instrument(skip(self))]
    pub async fn reacted_tuits(
        &self,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> ServiceResult<Vec<TuitResponse>> {
        let tuits = self
            .ctx
            .reaction_repo()
            .find_reacted_tuits(user_id, kind)
            .await?;
        Ok(tuits.iter().map(TuitResponse::from).collect())
    }

    /// Count edges of `kind` on a tuit
    #[instrument(skip(self))]
    pub async fn count(&self, tuit_id: Snowflake, kind: ReactionKind) -> ServiceResult<i64> {
        Ok(self.ctx.reaction_repo().count(tuit_id, kind).await?)
    }

    /// Recompute the cached stats block from the source collections and
    /// overwrite it.
    ///
    /// Likes and dislikes recount from the reaction edges. Replies and
    /// retuits keep their stored values; their sources are not tracked
    /// here.
    #[instrument(skip(self))]
    pub async fn rebuild_stats(&self, tuit_id: Snowflake) -> ServiceResult<StatsResponse> {
        let tuit = self
            .ctx
            .tuit_repo()
            .find_by_id(tuit_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::TuitNotFound(tuit_id)))?;

        let likes = self
            .ctx
            .reaction_repo()
            .count(tuit_id, ReactionKind::Like)
            .await?;
        let dislikes = self
            .ctx
            .reaction_repo()
            .count(tuit_id, ReactionKind::Dislike)
            .await?;

        let stats = TuitStats {
            replies: tuit.stats.replies,
            retuits: tuit.stats.retuits,
            likes: i32::try_from(likes).unwrap_or(i32::MAX),
            dislikes: i32::try_from(dislikes).unwrap_or(i32::MAX),
        };

        self.ctx.tuit_repo().update_stats(tuit_id, &stats).await?;

        info!(
            tuit_id = %tuit_id,
            likes = stats.likes,
            dislikes = stats.dislikes,
            "Stats rebuilt from edges"
        );

        Ok(StatsResponse::from(&stats))
    }
}
