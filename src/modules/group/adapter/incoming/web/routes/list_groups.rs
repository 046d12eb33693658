use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::group::application::ports::incoming::use_cases::ListGroupsError;
use crate::group::application::ports::outgoing::GroupView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List all groups (admin)
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = "groups",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Groups ordered by name", body = inline(SuccessResponse<Vec<GroupView>>)),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/groups")]
pub async fn list_groups_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.group.list.execute().await {
        Ok(groups) => ApiResponse::success(groups),
        Err(ListGroupsError::QueryFailed(msg)) => ApiResponse::storage_failure("list_groups", &msg),
    }
}
