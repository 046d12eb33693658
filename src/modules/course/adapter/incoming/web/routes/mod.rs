pub mod create_course;
pub mod create_curriculum;
pub mod create_video;
pub mod delete_course;
pub mod delete_curriculum;
pub mod get_course;
pub mod list_courses;

pub use create_course::*;
pub use create_curriculum::*;
pub use create_video::*;
pub use delete_course::*;
pub use delete_curriculum::*;
pub use get_course::*;
pub use list_courses::*;
