use actix_web::web;
use std::sync::Arc;

use crate::auth::application::helpers::CurrentUserResolver;
use crate::auth::application::ports::incoming::use_cases::{
    AssignUserGroupUseCase, CreateUserUseCase, FetchProfileUseCase, LoginUserUseCase,
    RefreshTokenUseCase, RegisterUserUseCase,
};
use crate::course::application::ports::incoming::use_cases::{
    CreateCourseUseCase, CreateCurriculumUseCase, CreateVideoUseCase, DeleteCourseUseCase,
    DeleteCurriculumUseCase, GetCourseUseCase, ListVisibleCoursesUseCase,
};
use crate::course::application::CourseUseCases;
use crate::group::application::ports::incoming::use_cases::{
    CreateGroupUseCase, GrantCourseUseCase, ListGroupsUseCase, RevokeCourseUseCase,
};
use crate::group::application::GroupUseCases;
use crate::progress::application::ports::incoming::use_cases::{
    FetchGroupProgressUseCase, FetchMyProgressUseCase, FetchProgressStatsUseCase,
    RecordViewingUseCase,
};
use crate::progress::application::ProgressUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every slot a test does not set panics when
/// called.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    create_user: Arc<dyn CreateUserUseCase + Send + Sync>,
    assign_user_group: Arc<dyn AssignUserGroupUseCase + Send + Sync>,
    current_user_resolver: CurrentUserResolver,
    group: GroupUseCases,
    course: CourseUseCases,
    progress: ProgressUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            create_user: Arc::new(StubCreateUserUseCase),
            assign_user_group: Arc::new(StubAssignUserGroupUseCase),
            current_user_resolver: CurrentUserResolver::new(Arc::new(InMemoryUserStore::new())),
            group: GroupUseCases {
                create: Arc::new(StubCreateGroupUseCase),
                list: Arc::new(StubListGroupsUseCase),
                grant_course: Arc::new(StubGrantCourseUseCase),
                revoke_course: Arc::new(StubRevokeCourseUseCase),
            },
            course: CourseUseCases {
                list_visible: Arc::new(StubListVisibleCoursesUseCase),
                get: Arc::new(StubGetCourseUseCase),
                create_course: Arc::new(StubCreateCourseUseCase),
                create_curriculum: Arc::new(StubCreateCurriculumUseCase),
                create_video: Arc::new(StubCreateVideoUseCase),
                delete_course: Arc::new(StubDeleteCourseUseCase),
                delete_curriculum: Arc::new(StubDeleteCurriculumUseCase),
            },
            progress: ProgressUseCases {
                record_viewing: Arc::new(StubRecordViewingUseCase),
                my_progress: Arc::new(StubFetchMyProgressUseCase),
                stats: Arc::new(StubFetchProgressStatsUseCase),
                group_progress: Arc::new(StubFetchGroupProgressUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    /// Backs the current-user resolver with `store`.
    pub fn with_users(mut self, store: InMemoryUserStore) -> Self {
        self.current_user_resolver = CurrentUserResolver::new(Arc::new(store));
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl RefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + Send + Sync + 'static) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_assign_user_group(
        mut self,
        uc: impl AssignUserGroupUseCase + Send + Sync + 'static,
    ) -> Self {
        self.assign_user_group = Arc::new(uc);
        self
    }

    pub fn with_create_group(mut self, uc: impl CreateGroupUseCase + Send + Sync + 'static) -> Self {
        self.group.create = Arc::new(uc);
        self
    }

    pub fn with_list_groups(mut self, uc: impl ListGroupsUseCase + Send + Sync + 'static) -> Self {
        self.group.list = Arc::new(uc);
        self
    }

    pub fn with_grant_course(mut self, uc: impl GrantCourseUseCase + Send + Sync + 'static) -> Self {
        self.group.grant_course = Arc::new(uc);
        self
    }

    pub fn with_revoke_course(
        mut self,
        uc: impl RevokeCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group.revoke_course = Arc::new(uc);
        self
    }

    pub fn with_list_visible_courses(
        mut self,
        uc: impl ListVisibleCoursesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.list_visible = Arc::new(uc);
        self
    }

    pub fn with_get_course(mut self, uc: impl GetCourseUseCase + Send + Sync + 'static) -> Self {
        self.course.get = Arc::new(uc);
        self
    }

    pub fn with_create_course(
        mut self,
        uc: impl CreateCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.create_course = Arc::new(uc);
        self
    }

    pub fn with_create_curriculum(
        mut self,
        uc: impl CreateCurriculumUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.create_curriculum = Arc::new(uc);
        self
    }

    pub fn with_create_video(mut self, uc: impl CreateVideoUseCase + Send + Sync + 'static) -> Self {
        self.course.create_video = Arc::new(uc);
        self
    }

    pub fn with_delete_course(
        mut self,
        uc: impl DeleteCourseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.delete_course = Arc::new(uc);
        self
    }

    pub fn with_delete_curriculum(
        mut self,
        uc: impl DeleteCurriculumUseCase + Send + Sync + 'static,
    ) -> Self {
        self.course.delete_curriculum = Arc::new(uc);
        self
    }

    pub fn with_record_viewing(
        mut self,
        uc: impl RecordViewingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.progress.record_viewing = Arc::new(uc);
        self
    }

    pub fn with_my_progress(
        mut self,
        uc: impl FetchMyProgressUseCase + Send + Sync + 'static,
    ) -> Self {
        self.progress.my_progress = Arc::new(uc);
        self
    }

    pub fn with_progress_stats(
        mut self,
        uc: impl FetchProgressStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.progress.stats = Arc::new(uc);
        self
    }

    pub fn with_group_progress(
        mut self,
        uc: impl FetchGroupProgressUseCase + Send + Sync + 'static,
    ) -> Self {
        self.progress.group_progress = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            fetch_profile_use_case: self.fetch_profile,
            create_user_use_case: self.create_user,
            assign_user_group_use_case: self.assign_user_group,
            current_user_resolver: self.current_user_resolver,
            group: self.group,
            course: self.course,
            progress: self.progress,
        })
    }
}
