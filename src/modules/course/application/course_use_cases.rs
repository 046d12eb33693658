use std::sync::Arc;

use crate::course::application::ports::incoming::use_cases::{
    CreateCourseUseCase, CreateCurriculumUseCase, CreateVideoUseCase, DeleteCourseUseCase,
    DeleteCurriculumUseCase, GetCourseUseCase, ListVisibleCoursesUseCase,
};

#[derive(Clone)]
pub struct CourseUseCases {
    pub list_visible: Arc<dyn ListVisibleCoursesUseCase + Send + Sync>,
    pub get: Arc<dyn GetCourseUseCase + Send + Sync>,
    pub create_course: Arc<dyn CreateCourseUseCase + Send + Sync>,
    pub create_curriculum: Arc<dyn CreateCurriculumUseCase + Send + Sync>,
    pub create_video: Arc<dyn CreateVideoUseCase + Send + Sync>,
    pub delete_course: Arc<dyn DeleteCourseUseCase + Send + Sync>,
    pub delete_curriculum: Arc<dyn DeleteCurriculumUseCase + Send + Sync>,
}

