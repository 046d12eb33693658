use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::group::application::ports::incoming::use_cases::RevokeCourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Withdraw a course from a group (admin)
#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}/courses/{course_id}",
    tag = "groups",
    security(("bearer_auth" = [])),
    params(
        ("group_id" = Uuid, Path, description = "Group id"),
        ("course_id" = Uuid, Path, description = "Course id"),
    ),
    responses(
        (status = 204, description = "Grant removed"),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "No such grant", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/groups/{group_id}/courses/{course_id}")]
pub async fn revoke_course_handler(
    _admin: AdminUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (group_id, course_id) = path.into_inner();

    match data.group.revoke_course.execute(group_id, course_id).await {
        Ok(()) => ApiResponse::<()>::no_content(),
        Err(RevokeCourseError::GrantNotFound) => {
            ApiResponse::not_found("GRANT_NOT_FOUND", "Course is not granted to this group")
        }
        Err(RevokeCourseError::RepositoryError(msg)) => {
            ApiResponse::storage_failure("revoke_course", &msg)
        }
    }
}
