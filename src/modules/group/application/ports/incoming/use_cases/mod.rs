mod create_group;
mod grant_course;
mod list_groups;
mod revoke_course;

pub use create_group::{CreateGroupCommand, CreateGroupCommandError, CreateGroupError, CreateGroupUseCase};
pub use grant_course::{GrantCourseError, GrantCourseUseCase};
pub use list_groups::{ListGroupsError, ListGroupsUseCase};
pub use revoke_course::{RevokeCourseError, RevokeCourseUseCase};
