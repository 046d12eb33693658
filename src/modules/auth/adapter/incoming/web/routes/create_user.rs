use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::register_user::map_user_input_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::{CreateUserCommand, CreateUserError};
use crate::auth::application::ports::outgoing::UserResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "new.hire@example.com")]
    pub email: String,

    #[schema(example = "New Hire")]
    pub name: String,

    pub password: String,

    #[serde(default = "default_role")]
    pub role: UserRole,

    pub group_id: Option<Uuid>,
}

fn default_role() -> UserRole {
    UserRole::User
}

/// Create an account (admin)
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<UserResult>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users")]
pub async fn create_user_handler(
    admin: AdminUser,
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command =
        match CreateUserCommand::new(dto.email, dto.name, dto.password, dto.role, dto.group_id) {
            Ok(cmd) => cmd,
            Err(e) => return map_user_input_error(e),
        };

    match data.create_user_use_case.execute(command).await {
        Ok(user) => {
            tracing::info!(
                admin_id = %admin.user_id,
                user_id = %user.id,
                role = %user.role,
                "Account created by administrator"
            );
            ApiResponse::created(user)
        }
        Err(e) => map_create_user_error(e),
    }
}

fn map_create_user_error(e: CreateUserError) -> HttpResponse {
    match e {
        CreateUserError::EmailAlreadyExists => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        CreateUserError::GroupNotFound => {
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        CreateUserError::HashingFailed(msg) | CreateUserError::RepositoryError(msg) => {
            ApiResponse::storage_failure("create_user", &msg)
        }
    }
}
