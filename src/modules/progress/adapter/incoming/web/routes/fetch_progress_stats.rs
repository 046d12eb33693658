use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::progress::application::domain::MemberProgress;
use crate::progress::application::ports::incoming::use_cases::FetchProgressStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Progress of every account against the full catalog (admin)
#[utoipa::path(
    get,
    path = "/api/logs/stats",
    tag = "progress",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "One entry per account, ordered by name", body = inline(SuccessResponse<Vec<MemberProgress>>)),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/logs/stats")]
pub async fn fetch_progress_stats_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.progress.stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(FetchProgressStatsError::QueryFailed(msg)) => {
            ApiResponse::storage_failure("fetch_progress_stats", &msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::auth::application::domain::entities::UserRole;
    use crate::progress::application::services::FetchProgressStatsService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::lms_fixtures::LmsFixture;
    use crate::tests::support::read_json;

    async fn call(fixture: &LmsFixture, role: UserRole) -> actix_web::dev::ServiceResponse {
        let mut store = fixture.progress_store();
        for video in fixture.video_ids(fixture.course_a).into_iter().take(6) {
            store = store.with_log(fixture.member.id, video, 60, true);
        }
        let state = TestAppStateBuilder::default()
            .with_progress_stats(FetchProgressStatsService::new(
                Arc::new(fixture.catalog()),
                store,
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(fixture.admin.id, role))
                .service(fetch_progress_stats_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/logs/stats")
            .insert_header(bearer())
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn admin_gets_rates_for_every_account() {
        let fixture = LmsFixture::build(6, 4);

        let resp = call(&fixture, UserRole::Admin).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        let entries = json["data"].as_array().unwrap();
        assert_eq!(entries.len(), 4);

        let member = entries
            .iter()
            .find(|e| e["user"]["id"] == fixture.member.id.to_string())
            .unwrap();
        assert_eq!(member["progress"]["totalVideos"], 10);
        assert_eq!(member["progress"]["completionRate"], 60);
    }

    #[actix_web::test]
    async fn learner_is_forbidden() {
        let fixture = LmsFixture::standard();

        let resp = call(&fixture, UserRole::User).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
