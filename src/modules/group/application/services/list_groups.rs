use async_trait::async_trait;

use crate::group::application::ports::{
    incoming::use_cases::{ListGroupsError, ListGroupsUseCase},
    outgoing::{GroupQuery, GroupView},
};

pub struct ListGroupsService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListGroupsService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListGroupsUseCase for ListGroupsService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<GroupView>, ListGroupsError> {
        self.query
            .list_groups()
            .await
            .map_err(|e| ListGroupsError::QueryFailed(e.to_string()))
    }
}
