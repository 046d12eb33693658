use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError, UserInputError,
};
use crate::auth::application::ports::outgoing::UserResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = "correct-horse-battery")]
    pub password: String,

    /// Group code handed out by an administrator
    #[schema(example = "SALES-2025")]
    pub group_code: Option<String>,
}

pub(crate) fn map_user_input_error(e: UserInputError) -> HttpResponse {
    let code = match e {
        UserInputError::InvalidEmail => "INVALID_EMAIL",
        UserInputError::EmptyName => "EMPTY_NAME",
        UserInputError::NameTooLong => "NAME_TOO_LONG",
        UserInputError::PasswordTooShort => "PASSWORD_TOO_SHORT",
    };
    ApiResponse::bad_request(code, &e.to_string())
}

/// Self-registration
///
/// Creates a learner account. A group code places the learner in that group.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<UserResult>)),
        (status = 400, description = "Validation failed or unknown group code", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterUserCommand::new(dto.email, dto.name, dto.password, dto.group_code)
    {
        Ok(cmd) => cmd,
        Err(e) => return map_user_input_error(e),
    };

    match data.register_user_use_case.execute(command).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, group_id = ?user.group_id, "User registered");
            ApiResponse::created(user)
        }
        Err(e) => map_register_error(e),
    }
}

fn map_register_error(e: RegisterUserError) -> HttpResponse {
    match e {
        RegisterUserError::EmailAlreadyExists => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        RegisterUserError::InvalidGroupCode => {
            ApiResponse::bad_request("INVALID_GROUP_CODE", "Group code does not match any group")
        }
        RegisterUserError::HashingFailed(msg) | RegisterUserError::RepositoryError(msg) => {
            ApiResponse::storage_failure("register_user", &msg)
        }
    }
}
