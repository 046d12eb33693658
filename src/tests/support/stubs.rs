use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{CurrentUser, UserId, UserRole};
use crate::auth::application::ports::incoming::use_cases::{
    AssignUserGroupError, AssignUserGroupUseCase, CreateUserCommand, CreateUserError,
    CreateUserUseCase, FetchProfileError, FetchProfileUseCase, LoginCommand, LoginError,
    LoginResult, LoginUserUseCase, RefreshTokenError, RefreshTokenResult, RefreshTokenUseCase,
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, UserProfile,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, UserQuery, UserQueryError, UserQueryResult,
    UserRepository, UserRepositoryError, UserResult,
};
use crate::course::application::domain::{CatalogScope, CourseTree, CurriculumTree, VideoItem};
use crate::course::application::ports::incoming::use_cases::{
    CreateCourseCommand, CreateCourseError, CreateCourseUseCase, CreateCurriculumCommand,
    CreateCurriculumError, CreateCurriculumUseCase, CreateVideoCommand, CreateVideoError,
    CreateVideoUseCase, DeleteCourseError, DeleteCourseUseCase, DeleteCurriculumError,
    DeleteCurriculumUseCase, GetCourseError, GetCourseUseCase, ListVisibleCoursesError,
    ListVisibleCoursesUseCase,
};
use crate::course::application::ports::outgoing::{
    CatalogQuery, CatalogQueryError, CourseRepository, CourseRepositoryError, NewCourse,
    NewCurriculum, NewVideo,
};
use crate::group::application::ports::incoming::use_cases::{
    CreateGroupCommand, CreateGroupError, CreateGroupUseCase, GrantCourseError,
    GrantCourseUseCase, ListGroupsError, ListGroupsUseCase, RevokeCourseError,
    RevokeCourseUseCase,
};
use crate::group::application::ports::outgoing::{
    CreateGroupData, GrantOutcome, GroupQuery, GroupQueryError, GroupRepository,
    GroupRepositoryError, GroupView,
};
use crate::progress::application::domain::{
    GroupProgressReport, LearnerSummary, MemberProgress, UserProgress, ViewingLog,
};
use crate::progress::application::ports::incoming::use_cases::{
    FetchGroupProgressError, FetchGroupProgressUseCase, FetchMyProgressError,
    FetchMyProgressUseCase, FetchProgressStatsError, FetchProgressStatsUseCase,
    RecordViewingCommand, RecordViewingError, RecordViewingUseCase,
};
use crate::progress::application::ports::outgoing::{
    ProgressQuery, ProgressQueryError, ViewingEvent, ViewingLogRepository,
    ViewingLogRepositoryError,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// Auth

/// Stores `hashed:<password>`.
#[derive(Debug, Clone, Default)]
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

/// A stored user whose password is `password123`.
pub fn sample_user(email: &str, role: UserRole, group_id: Option<Uuid>) -> UserQueryResult {
    UserQueryResult {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: "Sample User".to_string(),
        password_hash: "hashed:password123".to_string(),
        role,
        group_id,
        is_first_login: true,
        last_login_at: None,
        created_at: Utc::now(),
    }
}

fn to_user_result(user: &UserQueryResult) -> UserResult {
    UserResult {
        id: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role,
        group_id: user.group_id,
        is_first_login: user.is_first_login,
    }
}

/// Serves both the user query and repository ports from one shared list.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<Vec<UserQueryResult>>>,
    failure: Option<String>,
    reject_groups: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a storage error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_user(self, user: UserQueryResult) -> Self {
        lock(&self.users).push(user);
        self
    }

    /// Any group id written through the repository is reported missing.
    pub fn rejecting_groups(mut self) -> Self {
        self.reject_groups = true;
        self
    }

    pub fn get(&self, user_id: Uuid) -> Option<UserQueryResult> {
        lock(&self.users).iter().find(|u| u.id == user_id).cloned()
    }

    pub fn all(&self) -> Vec<UserQueryResult> {
        lock(&self.users).clone()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.users).is_empty()
    }

    pub fn set_group(&self, user_id: Uuid, group_id: Option<Uuid>) {
        if let Some(user) = lock(&self.users).iter_mut().find(|u| u.id == user_id) {
            user.group_id = group_id;
        }
    }

    fn check(&self) -> Result<(), String> {
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserQuery for InMemoryUserStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.get(user_id.value()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(lock(&self.users)
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        if data.group_id.is_some() && self.reject_groups {
            return Err(UserRepositoryError::GroupNotFound);
        }

        let mut users = lock(&self.users);
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&data.email)) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let user = UserQueryResult {
            id: Uuid::new_v4(),
            email: data.email,
            name: data.name,
            password_hash: data.password_hash,
            role: data.role,
            group_id: data.group_id,
            is_first_login: true,
            last_login_at: None,
            created_at: Utc::now(),
        };
        let result = to_user_result(&user);
        users.push(user);

        Ok(result)
    }

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut users = lock(&self.users);
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id.value())
            .ok_or(UserRepositoryError::UserNotFound)?;

        user.is_first_login = false;
        user.last_login_at = Some(at);
        Ok(())
    }

    async fn assign_group(
        &self,
        user_id: UserId,
        group_id: Option<Uuid>,
    ) -> Result<UserResult, UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut users = lock(&self.users);
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id.value())
            .ok_or(UserRepositoryError::UserNotFound)?;

        if group_id.is_some() && self.reject_groups {
            return Err(UserRepositoryError::GroupNotFound);
        }

        user.group_id = group_id;
        Ok(to_user_result(user))
    }
}

// Groups

pub fn sample_group(id: Uuid, name: &str, code: &str) -> GroupView {
    GroupView {
        id,
        name: name.to_string(),
        code: code.to_string(),
        description: None,
        created_at: Utc::now(),
    }
}

#[derive(Clone, Default)]
pub struct StubGroupQuery {
    groups: Vec<GroupView>,
}

impl StubGroupQuery {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_groups(groups: Vec<GroupView>) -> Self {
        Self { groups }
    }
}

#[async_trait]
impl GroupQuery for StubGroupQuery {
    async fn find_by_id(&self, group_id: Uuid) -> Result<Option<GroupView>, GroupQueryError> {
        Ok(self.groups.iter().find(|g| g.id == group_id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<GroupView>, GroupQueryError> {
        Ok(self.groups.iter().find(|g| g.code == code).cloned())
    }

    async fn list_groups(&self) -> Result<Vec<GroupView>, GroupQueryError> {
        let mut groups = self.groups.clone();
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(groups)
    }
}

#[derive(Default)]
struct GroupState {
    groups: Vec<GroupView>,
    courses: HashSet<Uuid>,
    grants: Vec<(Uuid, Uuid)>,
}

/// Group repository with the same uniqueness and reference rules as the
/// database schema.
#[derive(Clone, Default)]
pub struct InMemoryGroupStore {
    state: Arc<Mutex<GroupState>>,
}

impl InMemoryGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a course id that grants may reference.
    pub fn with_course(self, course_id: Uuid) -> Self {
        lock(&self.state).courses.insert(course_id);
        self
    }

    pub fn add_group(&self, name: &str, code: &str) -> Uuid {
        let id = Uuid::new_v4();
        lock(&self.state).groups.push(sample_group(id, name, code));
        id
    }

    pub fn groups(&self) -> Vec<GroupView> {
        lock(&self.state).groups.clone()
    }

    pub fn grants(&self) -> Vec<(Uuid, Uuid)> {
        lock(&self.state).grants.clone()
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupStore {
    async fn create_group(&self, data: CreateGroupData) -> Result<GroupView, GroupRepositoryError> {
        let mut state = lock(&self.state);
        if state.groups.iter().any(|g| g.code == data.code) {
            return Err(GroupRepositoryError::CodeAlreadyExists);
        }

        let group = GroupView {
            id: Uuid::new_v4(),
            name: data.name,
            code: data.code,
            description: data.description,
            created_at: Utc::now(),
        };
        state.groups.push(group.clone());
        Ok(group)
    }

    async fn grant_course(
        &self,
        group_id: Uuid,
        course_id: Uuid,
    ) -> Result<GrantOutcome, GroupRepositoryError> {
        let mut state = lock(&self.state);
        if !state.groups.iter().any(|g| g.id == group_id) {
            return Err(GroupRepositoryError::GroupNotFound);
        }
        if !state.courses.contains(&course_id) {
            return Err(GroupRepositoryError::CourseNotFound);
        }
        if state.grants.contains(&(group_id, course_id)) {
            return Ok(GrantOutcome::AlreadyGranted);
        }

        state.grants.push((group_id, course_id));
        Ok(GrantOutcome::Created)
    }

    async fn revoke_course(
        &self,
        group_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), GroupRepositoryError> {
        let mut state = lock(&self.state);
        let before = state.grants.len();
        state.grants.retain(|grant| *grant != (group_id, course_id));

        if state.grants.len() == before {
            return Err(GroupRepositoryError::GrantNotFound);
        }
        Ok(())
    }
}

// Catalog

#[derive(Default)]
struct CatalogState {
    courses: Vec<CourseTree>,
    grants: HashSet<(Uuid, Uuid)>,
}

/// Catalog read and write ports over nested course trees kept in creation
/// order. Clones share state; `failing` returns a handle whose calls error.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
    failure: Option<String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn course(&self, course_id: Uuid) -> Option<CourseTree> {
        lock(&self.state)
            .courses
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
    }

    pub fn has_grant(&self, group_id: Uuid, course_id: Uuid) -> bool {
        lock(&self.state).grants.contains(&(group_id, course_id))
    }

    pub fn add_course(&self, title: &str) -> Uuid {
        let id = Uuid::new_v4();
        lock(&self.state).courses.push(CourseTree {
            id,
            title: title.to_string(),
            description: None,
            thumbnail_url: None,
            created_at: Utc::now(),
            curriculums: Vec::new(),
        });
        id
    }

    pub fn add_curriculum(&self, course_id: Uuid, title: &str) -> Option<Uuid> {
        let id = Uuid::new_v4();
        let mut state = lock(&self.state);
        let course = state.courses.iter_mut().find(|c| c.id == course_id)?;
        course.curriculums.push(CurriculumTree {
            id,
            course_id,
            title: title.to_string(),
            description: None,
            videos: Vec::new(),
        });
        Some(id)
    }

    pub fn add_video(&self, curriculum_id: Uuid, title: &str) -> Option<Uuid> {
        let id = Uuid::new_v4();
        let mut state = lock(&self.state);
        let curriculum = state
            .courses
            .iter_mut()
            .flat_map(|c| c.curriculums.iter_mut())
            .find(|cur| cur.id == curriculum_id)?;
        curriculum.videos.push(VideoItem {
            id,
            curriculum_id,
            title: title.to_string(),
            description: None,
            video_url: format!("https://cdn.example.com/{}.mp4", id),
        });
        Some(id)
    }

    pub fn grant(&self, group_id: Uuid, course_id: Uuid) {
        lock(&self.state).grants.insert((group_id, course_id));
    }

    fn check(&self) -> Result<(), String> {
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogQuery for InMemoryCatalog {
    async fn list_courses(&self, scope: CatalogScope) -> Result<Vec<CourseTree>, CatalogQueryError> {
        self.check().map_err(CatalogQueryError::DatabaseError)?;
        let state = lock(&self.state);

        Ok(match scope {
            CatalogScope::All => state.courses.clone(),
            CatalogScope::Group(group_id) => state
                .courses
                .iter()
                .filter(|c| state.grants.contains(&(group_id, c.id)))
                .cloned()
                .collect(),
            CatalogScope::Empty => Vec::new(),
        })
    }

    async fn find_course(&self, course_id: Uuid) -> Result<Option<CourseTree>, CatalogQueryError> {
        self.check().map_err(CatalogQueryError::DatabaseError)?;
        Ok(self.course(course_id))
    }

    async fn group_has_course(
        &self,
        group_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, CatalogQueryError> {
        self.check().map_err(CatalogQueryError::DatabaseError)?;
        Ok(self.has_grant(group_id, course_id))
    }

    async fn find_video_course(&self, video_id: Uuid) -> Result<Option<Uuid>, CatalogQueryError> {
        self.check().map_err(CatalogQueryError::DatabaseError)?;
        Ok(lock(&self.state)
            .courses
            .iter()
            .find(|c| c.video_ids().any(|id| id == video_id))
            .map(|c| c.id))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCatalog {
    async fn create_course(&self, data: NewCourse) -> Result<CourseTree, CourseRepositoryError> {
        self.check().map_err(CourseRepositoryError::DatabaseError)?;
        let course = CourseTree {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            thumbnail_url: data.thumbnail_url,
            created_at: Utc::now(),
            curriculums: Vec::new(),
        };
        lock(&self.state).courses.push(course.clone());
        Ok(course)
    }

    async fn create_curriculum(
        &self,
        data: NewCurriculum,
    ) -> Result<CurriculumTree, CourseRepositoryError> {
        self.check().map_err(CourseRepositoryError::DatabaseError)?;
        let mut state = lock(&self.state);
        let course = state
            .courses
            .iter_mut()
            .find(|c| c.id == data.course_id)
            .ok_or(CourseRepositoryError::CourseNotFound)?;

        let curriculum = CurriculumTree {
            id: Uuid::new_v4(),
            course_id: data.course_id,
            title: data.title,
            description: data.description,
            videos: Vec::new(),
        };
        course.curriculums.push(curriculum.clone());
        Ok(curriculum)
    }

    async fn create_video(&self, data: NewVideo) -> Result<VideoItem, CourseRepositoryError> {
        self.check().map_err(CourseRepositoryError::DatabaseError)?;
        let mut state = lock(&self.state);
        let curriculum = state
            .courses
            .iter_mut()
            .flat_map(|c| c.curriculums.iter_mut())
            .find(|cur| cur.id == data.curriculum_id)
            .ok_or(CourseRepositoryError::CurriculumNotFound)?;

        let video = VideoItem {
            id: Uuid::new_v4(),
            curriculum_id: data.curriculum_id,
            title: data.title,
            description: data.description,
            video_url: data.video_url,
        };
        curriculum.videos.push(video.clone());
        Ok(video)
    }

    async fn delete_course(&self, course_id: Uuid) -> Result<(), CourseRepositoryError> {
        self.check().map_err(CourseRepositoryError::DatabaseError)?;
        let mut state = lock(&self.state);
        let before = state.courses.len();
        state.courses.retain(|c| c.id != course_id);
        if state.courses.len() == before {
            return Err(CourseRepositoryError::CourseNotFound);
        }

        state.grants.retain(|(_, granted)| *granted != course_id);
        Ok(())
    }

    async fn delete_curriculum(&self, curriculum_id: Uuid) -> Result<(), CourseRepositoryError> {
        self.check().map_err(CourseRepositoryError::DatabaseError)?;
        let mut state = lock(&self.state);
        let course = state
            .courses
            .iter_mut()
            .find(|c| c.curriculums.iter().any(|cur| cur.id == curriculum_id))
            .ok_or(CourseRepositoryError::CurriculumNotFound)?;

        course.curriculums.retain(|cur| cur.id != curriculum_id);
        Ok(())
    }
}

// Progress

/// Viewing logs plus the account list the progress queries read.
#[derive(Clone, Default)]
pub struct InMemoryProgress {
    logs: Arc<Mutex<Vec<ViewingLog>>>,
    users: Vec<LearnerSummary>,
    failure: Option<String>,
}

impl InMemoryProgress {
    pub fn new(users: Vec<LearnerSummary>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Seeds a log through the same merge rule as `upsert`.
    pub fn with_log(self, user_id: Uuid, video_id: Uuid, watched_seconds: i32, is_completed: bool) -> Self {
        self.merge(ViewingEvent {
            user_id,
            video_id,
            watched_seconds,
            is_completed,
            watched_at: Utc::now(),
        });
        self
    }

    pub fn logs(&self) -> Vec<ViewingLog> {
        lock(&self.logs).clone()
    }

    fn merge(&self, event: ViewingEvent) -> ViewingLog {
        let mut logs = lock(&self.logs);
        match logs
            .iter_mut()
            .find(|l| l.user_id == event.user_id && l.video_id == event.video_id)
        {
            Some(existing) => {
                existing.watched_seconds = existing.watched_seconds.max(event.watched_seconds);
                existing.is_completed = existing.is_completed || event.is_completed;
                existing.last_watched_at = event.watched_at;
                existing.clone()
            }
            None => {
                let log = ViewingLog {
                    id: Uuid::new_v4(),
                    user_id: event.user_id,
                    video_id: event.video_id,
                    watched_seconds: event.watched_seconds,
                    is_completed: event.is_completed,
                    last_watched_at: event.watched_at,
                };
                logs.push(log.clone());
                log
            }
        }
    }

    fn sorted_users<F>(&self, keep: F) -> Vec<LearnerSummary>
    where
        F: Fn(&LearnerSummary) -> bool,
    {
        let mut users: Vec<_> = self.users.iter().filter(|u| keep(u)).cloned().collect();
        users.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        users
    }

    fn check(&self) -> Result<(), String> {
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ViewingLogRepository for InMemoryProgress {
    async fn upsert(&self, event: ViewingEvent) -> Result<ViewingLog, ViewingLogRepositoryError> {
        self.check().map_err(ViewingLogRepositoryError::DatabaseError)?;
        Ok(self.merge(event))
    }
}

#[async_trait]
impl ProgressQuery for InMemoryProgress {
    async fn logs_for_users(
        &self,
        user_ids: &[Uuid],
        video_ids: &[Uuid],
    ) -> Result<Vec<ViewingLog>, ProgressQueryError> {
        self.check().map_err(ProgressQueryError::DatabaseError)?;
        Ok(lock(&self.logs)
            .iter()
            .filter(|l| user_ids.contains(&l.user_id) && video_ids.contains(&l.video_id))
            .cloned()
            .collect())
    }

    async fn members_of_group(
        &self,
        group_id: Uuid,
    ) -> Result<Vec<LearnerSummary>, ProgressQueryError> {
        self.check().map_err(ProgressQueryError::DatabaseError)?;
        Ok(self.sorted_users(|u| u.group_id == Some(group_id)))
    }

    async fn all_users(&self) -> Result<Vec<LearnerSummary>, ProgressQueryError> {
        self.check().map_err(ProgressQueryError::DatabaseError)?;
        Ok(self.sorted_users(|_| true))
    }
}

// Placeholder use cases for AppState slots a test does not exercise

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<UserResult, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<RefreshTokenResult, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _command: CreateUserCommand) -> Result<UserResult, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAssignUserGroupUseCase;

#[async_trait]
impl AssignUserGroupUseCase for StubAssignUserGroupUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _group_id: Option<Uuid>,
    ) -> Result<UserResult, AssignUserGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateGroupUseCase;

#[async_trait]
impl CreateGroupUseCase for StubCreateGroupUseCase {
    async fn execute(&self, _command: CreateGroupCommand) -> Result<GroupView, CreateGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListGroupsUseCase;

#[async_trait]
impl ListGroupsUseCase for StubListGroupsUseCase {
    async fn execute(&self) -> Result<Vec<GroupView>, ListGroupsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGrantCourseUseCase;

#[async_trait]
impl GrantCourseUseCase for StubGrantCourseUseCase {
    async fn execute(
        &self,
        _group_id: Uuid,
        _course_id: Uuid,
    ) -> Result<GrantOutcome, GrantCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRevokeCourseUseCase;

#[async_trait]
impl RevokeCourseUseCase for StubRevokeCourseUseCase {
    async fn execute(&self, _group_id: Uuid, _course_id: Uuid) -> Result<(), RevokeCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListVisibleCoursesUseCase;

#[async_trait]
impl ListVisibleCoursesUseCase for StubListVisibleCoursesUseCase {
    async fn execute(&self, _user: &CurrentUser) -> Result<Vec<CourseTree>, ListVisibleCoursesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCourseUseCase;

#[async_trait]
impl GetCourseUseCase for StubGetCourseUseCase {
    async fn execute(
        &self,
        _user: &CurrentUser,
        _course_id: Uuid,
    ) -> Result<CourseTree, GetCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCourseUseCase;

#[async_trait]
impl CreateCourseUseCase for StubCreateCourseUseCase {
    async fn execute(&self, _command: CreateCourseCommand) -> Result<CourseTree, CreateCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCurriculumUseCase;

#[async_trait]
impl CreateCurriculumUseCase for StubCreateCurriculumUseCase {
    async fn execute(
        &self,
        _command: CreateCurriculumCommand,
    ) -> Result<CurriculumTree, CreateCurriculumError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateVideoUseCase;

#[async_trait]
impl CreateVideoUseCase for StubCreateVideoUseCase {
    async fn execute(&self, _command: CreateVideoCommand) -> Result<VideoItem, CreateVideoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCourseUseCase;

#[async_trait]
impl DeleteCourseUseCase for StubDeleteCourseUseCase {
    async fn execute(&self, _course_id: Uuid) -> Result<(), DeleteCourseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCurriculumUseCase;

#[async_trait]
impl DeleteCurriculumUseCase for StubDeleteCurriculumUseCase {
    async fn execute(&self, _curriculum_id: Uuid) -> Result<(), DeleteCurriculumError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRecordViewingUseCase;

#[async_trait]
impl RecordViewingUseCase for StubRecordViewingUseCase {
    async fn execute(
        &self,
        _user: &CurrentUser,
        _command: RecordViewingCommand,
    ) -> Result<ViewingLog, RecordViewingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchMyProgressUseCase;

#[async_trait]
impl FetchMyProgressUseCase for StubFetchMyProgressUseCase {
    async fn execute(&self, _user: &CurrentUser) -> Result<UserProgress, FetchMyProgressError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProgressStatsUseCase;

#[async_trait]
impl FetchProgressStatsUseCase for StubFetchProgressStatsUseCase {
    async fn execute(&self) -> Result<Vec<MemberProgress>, FetchProgressStatsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchGroupProgressUseCase;

#[async_trait]
impl FetchGroupProgressUseCase for StubFetchGroupProgressUseCase {
    async fn execute(
        &self,
        _group_id: Uuid,
    ) -> Result<GroupProgressReport, FetchGroupProgressError> {
        unimplemented!("Not used in this test")
    }
}
