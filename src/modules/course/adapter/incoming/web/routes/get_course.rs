use actix_web::{get, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::course::application::domain::CourseTree;
use crate::course::application::ports::incoming::use_cases::GetCourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Course detail
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course with curriculums and videos", body = inline(SuccessResponse<CourseTree>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "NOT_IN_GROUP or NO_GROUP_GRANT", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/courses/{course_id}")]
pub async fn get_course_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let current = match resolve_current_user_or_response(&data, &user).await {
        Ok(current) => current,
        Err(resp) => return resp,
    };

    match data.course.get.execute(&current, path.into_inner()).await {
        Ok(course) => ApiResponse::success(course),
        Err(e) => map_get_course_error(e),
    }
}

fn map_get_course_error(e: GetCourseError) -> HttpResponse {
    match e {
        GetCourseError::Denied(reason) => ApiResponse::forbidden(reason.code(), &reason.to_string()),
        GetCourseError::NotFound => ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found"),
        GetCourseError::QueryFailed(msg) => ApiResponse::storage_failure("get_course", &msg),
    }
}
