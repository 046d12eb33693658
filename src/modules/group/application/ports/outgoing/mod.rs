pub mod group_query;
pub mod group_repository;

pub use group_query::{GroupQuery, GroupQueryError, GroupView};
pub use group_repository::{CreateGroupData, GrantOutcome, GroupRepository, GroupRepositoryError};
