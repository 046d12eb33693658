//! Documentation-only mirrors of the envelope `ApiResponse` writes.

use serde::Serialize;
use utoipa::ToSchema;

/// `{"success": true, "data": ...}`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{"success": false, "error": {...}}`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `NOT_IN_GROUP`, `VIDEO_NOT_FOUND`,
    /// `ADMIN_REQUIRED`, `VALIDATION_ERROR`
    #[schema(example = "NO_GROUP_GRANT")]
    pub code: String,

    #[schema(example = "Your group has no access to this course")]
    pub message: String,
}
