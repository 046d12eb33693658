use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError, LoginResult};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    pub email: String,

    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

/// User login
///
/// Returns access and refresh tokens. `user.isFirstLogin` reports the flag as
/// it was before this login.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResult>)),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(email = %command.email(), "Login attempt");

    match data.login_user_use_case.execute(command).await {
        Ok(result) => {
            info!(user_id = %result.user.id, "User logged in");
            ApiResponse::success(result)
        }
        Err(e) => map_login_error(e),
    }
}

fn map_login_error(e: LoginError) -> HttpResponse {
    match e {
        LoginError::InvalidCredentials => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        LoginError::PasswordVerificationFailed(msg)
        | LoginError::TokenGenerationFailed(msg)
        | LoginError::QueryError(msg)
        | LoginError::RepositoryError(msg) => ApiResponse::storage_failure("login_user", &msg),
    }
}
