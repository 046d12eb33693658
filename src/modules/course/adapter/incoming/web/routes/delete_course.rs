use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::course::application::ports::incoming::use_cases::DeleteCourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a course with its curriculums, videos and viewing logs (admin)
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/courses/{course_id}")]
pub async fn delete_course_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.course.delete_course.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCourseError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(DeleteCourseError::RepositoryError(msg)) => {
            ApiResponse::storage_failure("delete_course", &msg)
        }
    }
}
