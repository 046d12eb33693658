use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_course::map_catalog_input_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::course::application::domain::VideoItem;
use crate::course::application::ports::incoming::use_cases::{CreateVideoCommand, CreateVideoError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    #[schema(example = "Fire exits")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "https://cdn.example.com/fire-exits.mp4")]
    pub video_url: String,
}

/// Add a video to a curriculum (admin)
#[utoipa::path(
    post,
    path = "/api/curriculums/{curriculum_id}/videos",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("curriculum_id" = Uuid, Path, description = "Curriculum id")),
    request_body = CreateVideoRequest,
    responses(
        (status = 201, description = "Video created", body = inline(SuccessResponse<VideoItem>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Curriculum not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/curriculums/{curriculum_id}/videos")]
pub async fn create_video_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateVideoRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateVideoCommand::new(
        path.into_inner(),
        dto.title,
        dto.description,
        dto.video_url,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return map_catalog_input_error(e),
    };

    match data.course.create_video.execute(command).await {
        Ok(video) => ApiResponse::created(video),
        Err(CreateVideoError::CurriculumNotFound) => {
            ApiResponse::not_found("CURRICULUM_NOT_FOUND", "Curriculum not found")
        }
        Err(CreateVideoError::RepositoryError(msg)) => {
            ApiResponse::storage_failure("create_video", &msg)
        }
    }
}
