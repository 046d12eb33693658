use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::group::application::ports::incoming::use_cases::{
    CreateGroupCommand, CreateGroupCommandError, CreateGroupError,
};
use crate::group::application::ports::outgoing::GroupView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[schema(example = "Field Sales")]
    pub name: String,

    /// Enrollment code learners type at registration
    #[schema(example = "SALES-2025")]
    pub code: String,

    pub description: Option<String>,
}

/// Create a learner group (admin)
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = "groups",
    security(("bearer_auth" = [])),
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = inline(SuccessResponse<GroupView>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 409, description = "Group code already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/groups")]
pub async fn create_group_handler(
    _admin: AdminUser,
    req: web::Json<CreateGroupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateGroupCommand::new(dto.name, dto.code, dto.description) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.group.create.execute(command).await {
        Ok(group) => ApiResponse::created(group),
        Err(CreateGroupError::CodeAlreadyExists) => {
            ApiResponse::conflict("GROUP_CODE_EXISTS", "Group code is already in use")
        }
        Err(CreateGroupError::RepositoryError(msg)) => {
            ApiResponse::storage_failure("create_group", &msg)
        }
    }
}

fn map_command_error(e: CreateGroupCommandError) -> HttpResponse {
    let code = match e {
        CreateGroupCommandError::EmptyName => "EMPTY_NAME",
        CreateGroupCommandError::NameTooLong => "NAME_TOO_LONG",
        CreateGroupCommandError::EmptyCode
        | CreateGroupCommandError::CodeTooLong
        | CreateGroupCommandError::InvalidCode => "INVALID_GROUP_CODE",
    };
    ApiResponse::bad_request(code, &e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserRole;
    use crate::group::application::ports::incoming::use_cases::CreateGroupUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::read_json;

    struct MockCreateGroup {
        fail_with: Option<CreateGroupError>,
    }

    #[async_trait]
    impl CreateGroupUseCase for MockCreateGroup {
        async fn execute(&self, command: CreateGroupCommand) -> Result<GroupView, CreateGroupError> {
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            Ok(GroupView {
                id: Uuid::new_v4(),
                name: command.name().to_string(),
                code: command.code().to_string(),
                description: command.description().cloned(),
                created_at: Utc::now(),
            })
        }
    }

    async fn call(role: UserRole, mock: MockCreateGroup, body: serde_json::Value) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().with_create_group(mock).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(Uuid::new_v4(), role))
                .service(create_group_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/groups")
            .insert_header(bearer())
            .set_json(body)
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn admin_creates_group() {
        let resp = call(
            UserRole::Admin,
            MockCreateGroup { fail_with: None },
            serde_json::json!({ "name": "Sales", "code": "sales-2025" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["code"], "SALES-2025");
    }

    #[actix_web::test]
    async fn malformed_code_is_rejected() {
        let resp = call(
            UserRole::Admin,
            MockCreateGroup { fail_with: None },
            serde_json::json!({ "name": "Sales", "code": "sales team" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_GROUP_CODE");
    }

    #[actix_web::test]
    async fn duplicate_code_conflicts() {
        let resp = call(
            UserRole::Admin,
            MockCreateGroup {
                fail_with: Some(CreateGroupError::CodeAlreadyExists),
            },
            serde_json::json!({ "name": "Sales", "code": "SALES" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "GROUP_CODE_EXISTS");
    }

    #[actix_web::test]
    async fn learner_is_forbidden() {
        let resp = call(
            UserRole::User,
            MockCreateGroup { fail_with: None },
            serde_json::json!({ "name": "Sales", "code": "SALES" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
