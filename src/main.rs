pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::{auth, course, group, progress};

#[cfg(test)]
mod tests;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::{
    Argon2Hasher, JwtConfig, JwtTokenService, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::helpers::CurrentUserResolver;
use crate::auth::application::ports::incoming::use_cases::{
    AssignUserGroupUseCase, CreateUserCommand, CreateUserError, CreateUserUseCase,
    FetchProfileUseCase, LoginUserUseCase, RefreshTokenUseCase, RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    AssignUserGroupService, CreateUserService, FetchProfileService, LoginUserService,
    RefreshTokenService, RegisterUserService,
};
use crate::course::adapter::outgoing::{CatalogQueryPostgres, CourseRepositoryPostgres};
use crate::course::application::ports::outgoing::CatalogQuery;
use crate::course::application::services::{
    CreateCourseService, CreateCurriculumService, CreateVideoService, DeleteCourseService,
    DeleteCurriculumService, GetCourseService, ListVisibleCoursesService,
};
use crate::course::application::CourseUseCases;
use crate::group::adapter::outgoing::{GroupQueryPostgres, GroupRepositoryPostgres};
use crate::group::application::ports::outgoing::GroupQuery;
use crate::group::application::services::{
    CreateGroupService, GrantCourseService, ListGroupsService, RevokeCourseService,
};
use crate::group::application::GroupUseCases;
use crate::progress::adapter::outgoing::{ProgressQueryPostgres, ViewingLogRepositoryPostgres};
use crate::progress::application::services::{
    FetchGroupProgressService, FetchMyProgressService, FetchProgressStatsService,
    RecordViewingService,
};
use crate::progress::application::ProgressUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::config::{AppConfig, BootstrapAdmin};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub create_user_use_case: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub assign_user_group_use_case: Arc<dyn AssignUserGroupUseCase + Send + Sync>,
    pub current_user_resolver: CurrentUserResolver,
    pub group: GroupUseCases,
    pub course: CourseUseCases,
    pub progress: ProgressUseCases,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, e);
    io::Error::other(format!("{}: {}", context, e))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("Invalid JWT configuration", e))?;
    let argon2_hasher =
        Argon2Hasher::from_env().map_err(|e| startup_error("Invalid Argon2 configuration", e))?;

    let server_url = config.server_url();
    info!("Server will listen on {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| startup_error("Failed to run migrations", e))?;

    let db_arc = Arc::new(conn);

    // Adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let group_query = GroupQueryPostgres::new(Arc::clone(&db_arc));
    let group_repo = GroupRepositoryPostgres::new(Arc::clone(&db_arc));
    let catalog = CatalogQueryPostgres::new(Arc::clone(&db_arc));
    let course_repo = CourseRepositoryPostgres::new(Arc::clone(&db_arc));
    let progress_query = ProgressQueryPostgres::new(Arc::clone(&db_arc));
    let viewing_logs = ViewingLogRepositoryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let hasher_arc: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(argon2_hasher);
    let catalog_arc: Arc<dyn CatalogQuery + Send + Sync> = Arc::new(catalog.clone());
    let groups_arc: Arc<dyn GroupQuery + Send + Sync> = Arc::new(group_query.clone());

    // Auth use cases
    let create_user_use_case: Arc<dyn CreateUserUseCase + Send + Sync> = Arc::new(
        CreateUserService::new(user_repo.clone(), Arc::clone(&hasher_arc)),
    );

    if let Some(admin) = &config.bootstrap_admin {
        ensure_bootstrap_admin(create_user_use_case.as_ref(), admin).await?;
    }

    let state = AppState {
        register_user_use_case: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            group_query.clone(),
            Arc::clone(&hasher_arc),
        )),
        login_user_use_case: Arc::new(LoginUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher_arc),
            Arc::clone(&token_provider_arc),
        )),
        refresh_token_use_case: Arc::new(RefreshTokenService::new(Arc::clone(
            &token_provider_arc,
        ))),
        fetch_profile_use_case: Arc::new(FetchProfileService::new(user_query.clone())),
        create_user_use_case,
        assign_user_group_use_case: Arc::new(AssignUserGroupService::new(user_repo)),
        current_user_resolver: CurrentUserResolver::new(Arc::new(user_query)),
        group: GroupUseCases {
            create: Arc::new(CreateGroupService::new(group_repo.clone())),
            list: Arc::new(ListGroupsService::new(group_query)),
            grant_course: Arc::new(GrantCourseService::new(group_repo.clone())),
            revoke_course: Arc::new(RevokeCourseService::new(group_repo)),
        },
        course: CourseUseCases {
            list_visible: Arc::new(ListVisibleCoursesService::new(catalog)),
            get: Arc::new(GetCourseService::new(Arc::clone(&catalog_arc))),
            create_course: Arc::new(CreateCourseService::new(course_repo.clone())),
            create_curriculum: Arc::new(CreateCurriculumService::new(course_repo.clone())),
            create_video: Arc::new(CreateVideoService::new(course_repo.clone())),
            delete_course: Arc::new(DeleteCourseService::new(course_repo.clone())),
            delete_curriculum: Arc::new(DeleteCurriculumService::new(course_repo)),
        },
        progress: ProgressUseCases {
            record_viewing: Arc::new(RecordViewingService::new(
                viewing_logs,
                Arc::clone(&catalog_arc),
            )),
            my_progress: Arc::new(FetchMyProgressService::new(
                Arc::clone(&catalog_arc),
                progress_query.clone(),
            )),
            stats: Arc::new(FetchProgressStatsService::new(
                Arc::clone(&catalog_arc),
                progress_query.clone(),
            )),
            group_progress: Arc::new(FetchGroupProgressService::new(
                groups_arc,
                catalog_arc,
                progress_query,
            )),
        },
    };

    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

/// Creates the configured administrator unless the email is already taken.
async fn ensure_bootstrap_admin(
    create_user: &(dyn CreateUserUseCase + Send + Sync),
    admin: &BootstrapAdmin,
) -> io::Result<()> {
    let command = CreateUserCommand::new(
        admin.email.clone(),
        admin.name.clone(),
        admin.password.clone(),
        UserRole::Admin,
        None,
    )
    .map_err(|e| startup_error("Invalid bootstrap admin", e))?;

    match create_user.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "Bootstrap admin created");
            Ok(())
        }
        Err(CreateUserError::EmailAlreadyExists) => {
            info!("Bootstrap admin already present");
            Ok(())
        }
        Err(e) => Err(startup_error("Failed to create bootstrap admin", e)),
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::assign_user_group_handler);
    // Groups
    cfg.service(crate::group::adapter::incoming::web::routes::create_group_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::list_groups_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::grant_course_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::revoke_course_handler);
    // Courses
    cfg.service(crate::course::adapter::incoming::web::routes::list_courses_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::get_course_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::create_course_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::delete_course_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::create_curriculum_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::delete_curriculum_handler);
    cfg.service(crate::course::adapter::incoming::web::routes::create_video_handler);
    // Progress
    cfg.service(crate::progress::adapter::incoming::web::routes::record_viewing_handler);
    cfg.service(crate::progress::adapter::incoming::web::routes::fetch_my_progress_handler);
    cfg.service(crate::progress::adapter::incoming::web::routes::fetch_progress_stats_handler);
    cfg.service(crate::progress::adapter::incoming::web::routes::fetch_group_progress_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
