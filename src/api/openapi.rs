use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    AssignUserGroupRequest, CreateUserRequest, LoginRequestDto, RefreshTokenRequestDto,
    RegisterUserRequest,
};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::{
    LoginResult, LoginUserInfo, RefreshTokenResult, UserProfile,
};
use crate::auth::application::ports::outgoing::UserResult;
use crate::course::adapter::incoming::web::routes::{
    CreateCourseRequest, CreateCurriculumRequest, CreateVideoRequest,
};
use crate::course::application::domain::{CourseTree, CurriculumTree, VideoItem};
use crate::group::adapter::incoming::web::routes::{CreateGroupRequest, GrantCourseResponse};
use crate::group::application::ports::outgoing::GroupView;
use crate::progress::adapter::incoming::web::routes::RecordViewingRequest;
use crate::progress::application::domain::{
    CourseSummary, GroupProgressReport, LearnerSummary, MemberProgress, UserProgress, ViewingLog,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Training LMS API",
        version = "1.0.0",
        description = "Group-scoped course catalog and viewing progress for an in-house training site",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,

        // Users (admin)
        crate::auth::adapter::incoming::web::routes::create_user_handler,
        crate::auth::adapter::incoming::web::routes::assign_user_group_handler,

        // Groups (admin)
        crate::group::adapter::incoming::web::routes::create_group_handler,
        crate::group::adapter::incoming::web::routes::list_groups_handler,
        crate::group::adapter::incoming::web::routes::grant_course_handler,
        crate::group::adapter::incoming::web::routes::revoke_course_handler,

        // Courses
        crate::course::adapter::incoming::web::routes::list_courses_handler,
        crate::course::adapter::incoming::web::routes::get_course_handler,
        crate::course::adapter::incoming::web::routes::create_course_handler,
        crate::course::adapter::incoming::web::routes::delete_course_handler,
        crate::course::adapter::incoming::web::routes::create_curriculum_handler,
        crate::course::adapter::incoming::web::routes::delete_curriculum_handler,
        crate::course::adapter::incoming::web::routes::create_video_handler,

        // Progress
        crate::progress::adapter::incoming::web::routes::record_viewing_handler,
        crate::progress::adapter::incoming::web::routes::fetch_my_progress_handler,
        crate::progress::adapter::incoming::web::routes::fetch_progress_stats_handler,
        crate::progress::adapter::incoming::web::routes::fetch_group_progress_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth
            UserRole,
            RegisterUserRequest,
            LoginRequestDto,
            RefreshTokenRequestDto,
            CreateUserRequest,
            AssignUserGroupRequest,
            UserResult,
            UserProfile,
            LoginResult,
            LoginUserInfo,
            RefreshTokenResult,

            // Groups
            CreateGroupRequest,
            GroupView,
            GrantCourseResponse,

            // Courses
            CreateCourseRequest,
            CreateCurriculumRequest,
            CreateVideoRequest,
            CourseTree,
            CurriculumTree,
            VideoItem,

            // Progress
            RecordViewingRequest,
            ViewingLog,
            UserProgress,
            LearnerSummary,
            MemberProgress,
            CourseSummary,
            GroupProgressReport,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "users", description = "Account management (admin)"),
        (name = "groups", description = "Groups and course grants (admin)"),
        (name = "courses", description = "Course catalog"),
        (name = "progress", description = "Viewing logs and progress reports"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/auth/login",
            "/api/courses",
            "/api/courses/{course_id}",
            "/api/groups/{group_id}/courses/{course_id}",
            "/api/groups/{group_id}/progress",
            "/api/logs",
            "/api/logs/me",
            "/api/logs/stats",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing path {}",
                expected
            );
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
