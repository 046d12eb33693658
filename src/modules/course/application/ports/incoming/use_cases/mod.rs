mod create_course;
mod create_curriculum;
mod create_video;
mod delete_course;
mod delete_curriculum;
mod get_course;
mod list_visible_courses;

pub use create_course::{CreateCourseCommand, CreateCourseError, CreateCourseUseCase};
pub use create_curriculum::{
    CreateCurriculumCommand, CreateCurriculumError, CreateCurriculumUseCase,
};
pub use create_video::{CreateVideoCommand, CreateVideoError, CreateVideoUseCase};
pub use delete_course::{DeleteCourseError, DeleteCourseUseCase};
pub use delete_curriculum::{DeleteCurriculumError, DeleteCurriculumUseCase};
pub use get_course::{GetCourseError, GetCourseUseCase};
pub use list_visible_courses::{ListVisibleCoursesError, ListVisibleCoursesUseCase};

/// Validation failures shared by the catalog write commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogInputError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed 200 characters")]
    TitleTooLong,

    #[error("Video URL cannot be empty")]
    EmptyVideoUrl,
}

pub const MAX_TITLE_LENGTH: usize = 200;

pub(crate) fn normalize_title(title: String) -> Result<String, CatalogInputError> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(CatalogInputError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CatalogInputError::TitleTooLong);
    }
    Ok(title)
}

pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
