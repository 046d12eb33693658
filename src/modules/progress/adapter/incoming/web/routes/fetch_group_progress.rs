use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::progress::application::domain::GroupProgressReport;
use crate::progress::application::ports::incoming::use_cases::FetchGroupProgressError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Progress of a group's members over its granted courses (admin)
#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/progress",
    tag = "progress",
    security(("bearer_auth" = [])),
    params(("group_id" = Uuid, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group, granted courses and per-member progress", body = inline(SuccessResponse<GroupProgressReport>)),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/groups/{group_id}/progress")]
pub async fn fetch_group_progress_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.progress.group_progress.execute(path.into_inner()).await {
        Ok(report) => ApiResponse::success(report),
        Err(FetchGroupProgressError::GroupNotFound) => {
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(FetchGroupProgressError::QueryFailed(msg)) => {
            ApiResponse::storage_failure("fetch_group_progress", &msg)
        }
    }
}
