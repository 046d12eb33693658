mod create_group;
mod grant_course;
mod list_groups;
mod revoke_course;

pub use create_group::CreateGroupService;
pub use grant_course::GrantCourseService;
pub use list_groups::ListGroupsService;
pub use revoke_course::RevokeCourseService;
