use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_course::map_catalog_input_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::course::application::domain::CurriculumTree;
use crate::course::application::ports::incoming::use_cases::{
    CreateCurriculumCommand, CreateCurriculumError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurriculumRequest {
    #[schema(example = "Getting started")]
    pub title: String,
    pub description: Option<String>,
}

/// Add a curriculum to a course (admin)
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/curriculums",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("course_id" = Uuid, Path, description = "Course id")),
    request_body = CreateCurriculumRequest,
    responses(
        (status = 201, description = "Curriculum created", body = inline(SuccessResponse<CurriculumTree>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/courses/{course_id}/curriculums")]
pub async fn create_curriculum_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateCurriculumRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateCurriculumCommand::new(path.into_inner(), dto.title, dto.description)
    {
        Ok(cmd) => cmd,
        Err(e) => return map_catalog_input_error(e),
    };

    match data.course.create_curriculum.execute(command).await {
        Ok(curriculum) => ApiResponse::created(curriculum),
        Err(CreateCurriculumError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        Err(CreateCurriculumError::RepositoryError(msg)) => {
            ApiResponse::storage_failure("create_curriculum", &msg)
        }
    }
}
