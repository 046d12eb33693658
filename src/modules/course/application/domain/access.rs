use uuid::Uuid;

use crate::auth::application::domain::entities::CurrentUser;

/// Which slice of the course catalog a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogScope {
    /// Every course (administrators).
    All,
    /// Courses granted to this group.
    Group(Uuid),
    /// Nothing. A learner without a group has no assigned courses yet.
    Empty,
}

impl CatalogScope {
    pub fn for_user(user: &CurrentUser) -> Self {
        if user.is_admin() {
            return CatalogScope::All;
        }

        match user.group_id {
            Some(group_id) => CatalogScope::Group(group_id),
            None => CatalogScope::Empty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DenyReason {
    #[error("You are not a member of any group")]
    NotInGroup,

    #[error("Your group has no access to this course")]
    NoGroupGrant,
}

impl DenyReason {
    pub fn code(&self) -> &'static str {
        match self {
            DenyReason::NotInGroup => "NOT_IN_GROUP",
            DenyReason::NoGroupGrant => "NO_GROUP_GRANT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

impl AccessDecision {
    /// Decides course access from the caller's scope and whether the caller's
    /// group holds a grant for the course. `has_grant` is ignored for
    /// administrators and for callers without a group.
    pub fn decide(scope: CatalogScope, has_grant: bool) -> Self {
        match scope {
            CatalogScope::All => AccessDecision::Allow,
            CatalogScope::Empty => AccessDecision::Deny(DenyReason::NotInGroup),
            CatalogScope::Group(_) if has_grant => AccessDecision::Allow,
            CatalogScope::Group(_) => AccessDecision::Deny(DenyReason::NoGroupGrant),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}
