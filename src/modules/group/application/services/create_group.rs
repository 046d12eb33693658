use async_trait::async_trait;

use crate::group::application::ports::{
    incoming::use_cases::{CreateGroupCommand, CreateGroupError, CreateGroupUseCase},
    outgoing::{CreateGroupData, GroupRepository, GroupRepositoryError, GroupView},
};

pub struct CreateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateGroupUseCase for CreateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, command: CreateGroupCommand) -> Result<GroupView, CreateGroupError> {
        let data = CreateGroupData {
            name: command.name().to_string(),
            code: command.code().to_string(),
            description: command.description().cloned(),
        };

        let group = self.repository.create_group(data).await.map_err(|e| match e {
            GroupRepositoryError::CodeAlreadyExists => CreateGroupError::CodeAlreadyExists,
            other => CreateGroupError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(group_id = %group.id, code = %group.code, "Group created");
        Ok(group)
    }
}
