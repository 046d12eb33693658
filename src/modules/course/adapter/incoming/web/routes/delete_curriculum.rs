use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::course::application::ports::incoming::use_cases::DeleteCurriculumError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a curriculum with its videos and viewing logs (admin)
#[utoipa::path(
    delete,
    path = "/api/curriculums/{curriculum_id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("curriculum_id" = Uuid, Path, description = "Curriculum id")),
    responses(
        (status = 204, description = "Curriculum deleted"),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "Curriculum not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/curriculums/{curriculum_id}")]
pub async fn delete_curriculum_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.course.delete_curriculum.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCurriculumError::CurriculumNotFound) => {
            ApiResponse::not_found("CURRICULUM_NOT_FOUND", "Curriculum not found")
        }
        Err(DeleteCurriculumError::RepositoryError(msg)) => {
            ApiResponse::storage_failure("delete_curriculum", &msg)
        }
    }
}
