pub mod create_group;
pub mod grant_course;
pub mod list_groups;
pub mod revoke_course;

pub use create_group::*;
pub use grant_course::*;
pub use list_groups::*;
pub use revoke_course::*;
