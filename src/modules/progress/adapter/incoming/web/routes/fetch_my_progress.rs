use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::progress::application::domain::UserProgress;
use crate::progress::application::ports::incoming::use_cases::FetchMyProgressError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller's progress over the courses visible to them
#[utoipa::path(
    get,
    path = "/api/logs/me",
    tag = "progress",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Progress figures", body = inline(SuccessResponse<UserProgress>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/logs/me")]
pub async fn fetch_my_progress_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let current = match resolve_current_user_or_response(&data, &user).await {
        Ok(current) => current,
        Err(resp) => return resp,
    };

    match data.progress.my_progress.execute(&current).await {
        Ok(progress) => ApiResponse::success(progress),
        Err(FetchMyProgressError::QueryFailed(msg)) => {
            ApiResponse::storage_failure("fetch_my_progress", &msg)
        }
    }
}
