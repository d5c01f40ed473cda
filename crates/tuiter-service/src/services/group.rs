//! Group service
//!
//! Named member lists with an owner. The owner is a member by
//! construction and stays one through member-list replacement.

use tracing::{info, instrument};
use tuiter_core::entities::Group;
use tuiter_core::{DomainError, Snowflake};

use crate::dto::{CreateGroupRequest, GroupResponse, UpdateGroupRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Group service
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a group owned by `owner_id`
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        owner_id: Snowflake,
        request: CreateGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        if self.ctx.user_repo().find_by_id(owner_id).await?.is_none() {
            return Err(ServiceError::Domain(DomainError::UserNotFound(owner_id)));
        }

        let group = Group::new(
            self.ctx.generate_id(),
            request.name,
            owner_id,
            request.members,
        );
        self.ctx.group_repo().create(&group).await?;

        info!(
            group_id = %group.id,
            owner_id = %owner_id,
            members = group.member_count(),
            "Group created"
        );

        Ok(GroupResponse::from(&group))
    }

    /// Groups the user belongs to
    #[instrument(skip(self))]
    pub async fn groups_of(&self, user_id: Snowflake) -> ServiceResult<Vec<GroupResponse>> {
        let groups = self.ctx.group_repo().find_by_member(user_id).await?;
        Ok(groups.iter().map(GroupResponse::from).collect())
    }

    /// Get one group by id
    #[instrument(skip(self))]
    pub async fn get(&self, group_id: Snowflake) -> ServiceResult<GroupResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::GroupNotFound(group_id)))?;
        Ok(GroupResponse::from(&group))
    }

    /// Rename the group and/or replace its member list
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        group_id: Snowflake,
        request: UpdateGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        let mut group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::GroupNotFound(group_id)))?;

        if let Some(name) = request.name {
            group.name = name;
        }
        if let Some(mut members) = request.members {
            // Replacing the list must not drop the owner.
            if !members.contains(&group.owner) {
                members.push(group.owner);
            }
            group.members = members;
        }

        self.ctx.group_repo().update(&group).await?;

        info!(group_id = %group_id, members = group.member_count(), "Group updated");

        Ok(GroupResponse::from(&group))
    }

    /// Delete a group and its messages
    #[instrument(skip(self))]
    pub async fn delete(&self, group_id: Snowflake) -> ServiceResult<()> {
        if self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::Domain(DomainError::GroupNotFound(group_id)));
        }

        self.ctx.group_repo().delete(group_id).await?;

        info!(group_id = %group_id, "Group deleted");

        Ok(())
    }
}
