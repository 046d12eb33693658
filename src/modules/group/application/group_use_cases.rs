use std::sync::Arc;

use crate::group::application::ports::incoming::use_cases::{
    CreateGroupUseCase, GrantCourseUseCase, ListGroupsUseCase, RevokeCourseUseCase,
};

#[derive(Clone)]
pub struct GroupUseCases {
    pub create: Arc<dyn CreateGroupUseCase + Send + Sync>,
    pub list: Arc<dyn ListGroupsUseCase + Send + Sync>,
    pub grant_course: Arc<dyn GrantCourseUseCase + Send + Sync>,
    pub revoke_course: Arc<dyn RevokeCourseUseCase + Send + Sync>,
}
