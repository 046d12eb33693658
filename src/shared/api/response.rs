use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Body of every JSON response. Exactly one of `data` and `error` is set.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    fn with_data(status: StatusCode, data: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn success(data: T) -> HttpResponse {
        Self::with_data(StatusCode::OK, data)
    }

    pub fn created(data: T) -> HttpResponse {
        Self::with_data(StatusCode::CREATED, data)
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        let error = ApiError {
            code: code.to_string(),
            message: message.to_string(),
        };

        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(error),
        })
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    /// Generic 500. Callers log the cause themselves or use `storage_failure`.
    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }

    /// Logs a storage failure for operators and answers with the generic
    /// `INTERNAL_ERROR` body. The cause never reaches the client.
    pub fn storage_failure(operation: &str, cause: &dyn std::fmt::Display) -> HttpResponse {
        tracing::error!(operation, error = %cause, "Storage failure");
        Self::internal_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn success_wraps_data_without_error_field() {
        let resp = ApiResponse::success(serde_json::json!({ "completionRate": 60 }));
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["completionRate"], 60);
        assert!(json.get("error").is_none());
    }

    #[actix_web::test]
    async fn forbidden_carries_code_and_message() {
        let resp = ApiResponse::forbidden("NO_GROUP_GRANT", "No group grant for this course");
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let json = body_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NO_GROUP_GRANT");
        assert!(json.get("data").is_none());
    }

    #[actix_web::test]
    async fn storage_failure_hides_the_cause() {
        let resp = ApiResponse::storage_failure("list_courses", &"connection refused");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"]["message"], "An unexpected error occurred");
    }
}
