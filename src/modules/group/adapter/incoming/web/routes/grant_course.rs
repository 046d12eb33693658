use actix_web::{put, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::group::application::ports::incoming::use_cases::GrantCourseError;
use crate::group::application::ports::outgoing::GrantOutcome;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrantCourseResponse {
    pub group_id: Uuid,
    pub course_id: Uuid,
    /// False when the grant already existed
    pub created: bool,
}

/// Make a course visible to a group (admin)
#[utoipa::path(
    put,
    path = "/api/groups/{group_id}/courses/{course_id}",
    tag = "groups",
    security(("bearer_auth" = [])),
    params(
        ("group_id" = Uuid, Path, description = "Group id"),
        ("course_id" = Uuid, Path, description = "Course id"),
    ),
    responses(
        (status = 200, description = "Course granted", body = inline(SuccessResponse<GrantCourseResponse>)),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Group or course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/groups/{group_id}/courses/{course_id}")]
pub async fn grant_course_handler(
    _admin: AdminUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (group_id, course_id) = path.into_inner();

    match data.group.grant_course.execute(group_id, course_id).await {
        Ok(outcome) => ApiResponse::success(GrantCourseResponse {
            group_id,
            course_id,
            created: outcome == GrantOutcome::Created,
        }),
        Err(GrantCourseError::GroupNotFound) => {
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(GrantCourseError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(GrantCourseError::RepositoryError(msg)) => {
            ApiResponse::storage_failure("grant_course", &msg)
        }
    }
}
