use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::AssignUserGroupError;
use crate::auth::application::ports::outgoing::UserResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignUserGroupRequest {
    /// `null` removes the user from any group
    pub group_id: Option<Uuid>,
}

/// Assign a user to a group (admin)
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/group",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("user_id" = Uuid, Path, description = "User id")),
    request_body = AssignUserGroupRequest,
    responses(
        (status = 200, description = "Updated user", body = inline(SuccessResponse<UserResult>)),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "User or group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/{user_id}/group")]
pub async fn assign_user_group_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<AssignUserGroupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data
        .assign_user_group_use_case
        .execute(user_id, req.into_inner().group_id)
        .await
    {
        Ok(user) => ApiResponse::success(user),
        Err(e) => map_assign_error(e),
    }
}

fn map_assign_error(e: AssignUserGroupError) -> HttpResponse {
    match e {
        AssignUserGroupError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        AssignUserGroupError::GroupNotFound => {
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        AssignUserGroupError::RepositoryError(msg) => {
            ApiResponse::storage_failure("assign_user_group", &msg)
        }
    }
}
