use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{
    resolve_current_user_or_response, AuthenticatedUser,
};
use crate::progress::application::domain::ViewingLog;
use crate::progress::application::ports::incoming::use_cases::{
    RecordViewingCommand, RecordViewingError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordViewingRequest {
    pub video_id: Uuid,
    #[schema(example = 120)]
    pub watched_seconds: i32,
    #[serde(default)]
    pub is_completed: bool,
}

/// Record a viewing event for the caller
///
/// Repeated reports merge into one log per video: watched seconds keep the
/// highest value seen and completion never reverts.
#[utoipa::path(
    post,
    path = "/api/logs",
    tag = "progress",
    security(("bearer_auth" = [])),
    request_body = RecordViewingRequest,
    responses(
        (status = 200, description = "Stored log after merging", body = inline(SuccessResponse<ViewingLog>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "NOT_IN_GROUP or NO_GROUP_GRANT", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/logs")]
pub async fn record_viewing_handler(
    user: AuthenticatedUser,
    req: web::Json<RecordViewingRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RecordViewingCommand::new(dto.video_id, dto.watched_seconds, dto.is_completed)
    {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("INVALID_WATCHED_SECONDS", &e.to_string()),
    };

    let current = match resolve_current_user_or_response(&data, &user).await {
        Ok(current) => current,
        Err(resp) => return resp,
    };

    match data.progress.record_viewing.execute(&current, command).await {
        Ok(log) => ApiResponse::success(log),
        Err(e) => map_record_viewing_error(e),
    }
}

fn map_record_viewing_error(e: RecordViewingError) -> HttpResponse {
    match e {
        RecordViewingError::VideoNotFound => {
            ApiResponse::not_found("VIDEO_NOT_FOUND", "Video not found")
        }
        RecordViewingError::Denied(reason) => {
            ApiResponse::forbidden(reason.code(), &reason.to_string())
        }
        RecordViewingError::RepositoryError(msg) => {
            ApiResponse::storage_failure("record_viewing", &msg)
        }
    }
}
