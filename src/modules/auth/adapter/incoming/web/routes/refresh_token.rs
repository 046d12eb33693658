use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{RefreshTokenError, RefreshTokenResult};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResult>)),
        (status = 400, description = "Empty refresh token", body = ErrorResponse),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .refresh_token_use_case
        .execute(&req.into_inner().refresh_token)
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(e) => map_refresh_error(e),
    }
}

fn map_refresh_error(e: RefreshTokenError) -> HttpResponse {
    match e {
        RefreshTokenError::EmptyToken => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Refresh token cannot be empty")
        }
        RefreshTokenError::TokenExpired => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }
        RefreshTokenError::InvalidToken => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }
        RefreshTokenError::IssuingFailed(msg) => ApiResponse::storage_failure("refresh_token", &msg),
    }
}
