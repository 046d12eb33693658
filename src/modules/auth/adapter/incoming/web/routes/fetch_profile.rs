use actix_web::{get, web, HttpResponse, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{FetchProfileError, UserProfile};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Profile of the caller
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller profile", body = inline(SuccessResponse<UserProfile>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_profile_use_case
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => map_fetch_profile_error(e),
    }
}

fn map_fetch_profile_error(e: FetchProfileError) -> HttpResponse {
    match e {
        FetchProfileError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        FetchProfileError::QueryFailed(msg) => ApiResponse::storage_failure("fetch_profile", &msg),
    }
}
