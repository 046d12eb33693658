use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::course::application::domain::CourseTree;
use crate::course::application::ports::incoming::use_cases::{
    CatalogInputError, CreateCourseCommand, CreateCourseError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[schema(example = "Workplace Safety")]
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// Create a course (admin)
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "courses",
    security(("bearer_auth" = [])),
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = inline(SuccessResponse<CourseTree>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/courses")]
pub async fn create_course_handler(
    _admin: AdminUser,
    req: web::Json<CreateCourseRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateCourseCommand::new(dto.title, dto.description, dto.thumbnail_url) {
        Ok(cmd) => cmd,
        Err(e) => return map_catalog_input_error(e),
    };

    match data.course.create_course.execute(command).await {
        Ok(course) => ApiResponse::created(course),
        Err(CreateCourseError::RepositoryError(msg)) => {
            ApiResponse::storage_failure("create_course", &msg)
        }
    }
}

pub(crate) fn map_catalog_input_error(e: CatalogInputError) -> HttpResponse {
    let code = match e {
        CatalogInputError::EmptyTitle => "EMPTY_TITLE",
        CatalogInputError::TitleTooLong => "TITLE_TOO_LONG",
        CatalogInputError::EmptyVideoUrl => "EMPTY_VIDEO_URL",
    };
    ApiResponse::bad_request(code, &e.to_string())
}
