use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::course::application::domain::CourseTree;
use crate::course::application::ports::incoming::use_cases::ListVisibleCoursesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Courses visible to the caller
///
/// Administrators see every course. Learners see the courses granted to their
/// group, or nothing when they have no group.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visible courses with curriculums and videos", body = inline(SuccessResponse<Vec<CourseTree>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/courses")]
pub async fn list_courses_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let current = match resolve_current_user_or_response(&data, &user).await {
        Ok(current) => current,
        Err(resp) => return resp,
    };

    match data.course.list_visible.execute(&current).await {
        Ok(courses) => ApiResponse::success(courses),
        Err(ListVisibleCoursesError::QueryFailed(msg)) => {
            ApiResponse::storage_failure("list_courses", &msg)
        }
    }
}
