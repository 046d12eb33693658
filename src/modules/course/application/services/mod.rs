mod create_course;
mod create_curriculum;
mod create_video;
mod delete_course;
mod delete_curriculum;
mod get_course;
mod list_visible_courses;

pub use create_course::CreateCourseService;
pub use create_curriculum::CreateCurriculumService;
pub use create_video::CreateVideoService;
pub use delete_course::DeleteCourseService;
pub use delete_curriculum::DeleteCurriculumService;
pub use get_course::GetCourseService;
pub use list_visible_courses::ListVisibleCoursesService;
