use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::UserQueryResult;
use crate::group::application::ports::outgoing::GroupView;
use crate::progress::application::domain::LearnerSummary;
use crate::tests::support::stubs::{
    sample_group, InMemoryCatalog, InMemoryProgress, InMemoryUserStore, StubGroupQuery,
};

/// A small training site:
///
/// - `course_a` has two curriculums and is granted to `group_id`
/// - `course_b` has one curriculum and is granted to nobody
/// - `empty_group_id` has no grants and no members
/// - `member` and `second_member` belong to `group_id`, `ungrouped` has no
///   group and `admin` is an administrator without a group
///
/// Users sort by name in the order member, second_member, ungrouped, admin.
pub struct LmsFixture {
    pub group_id: Uuid,
    pub empty_group_id: Uuid,
    pub course_a: Uuid,
    pub course_b: Uuid,
    pub member: UserQueryResult,
    pub second_member: UserQueryResult,
    pub ungrouped: UserQueryResult,
    pub admin: UserQueryResult,
    groups: Vec<GroupView>,
    catalog: InMemoryCatalog,
    users: InMemoryUserStore,
    videos: HashMap<Uuid, Vec<Uuid>>,
}

impl LmsFixture {
    /// Four videos in `course_a`, three in `course_b`.
    pub fn standard() -> Self {
        Self::build(4, 3)
    }

    pub fn build(course_a_videos: usize, course_b_videos: usize) -> Self {
        let group_id = Uuid::new_v4();
        let empty_group_id = Uuid::new_v4();

        let catalog = InMemoryCatalog::new();
        let mut videos = HashMap::new();

        let course_a = catalog.add_course("Onboarding");
        let first_half = (course_a_videos + 1) / 2;
        let mut a_ids = seed_curriculum(&catalog, course_a, "Basics", first_half);
        a_ids.extend(seed_curriculum(
            &catalog,
            course_a,
            "Practice",
            course_a_videos - first_half,
        ));
        videos.insert(course_a, a_ids);

        let course_b = catalog.add_course("Compliance");
        videos.insert(
            course_b,
            seed_curriculum(&catalog, course_b, "Policies", course_b_videos),
        );

        catalog.grant(group_id, course_a);

        let member = user("Alice Member", "alice@example.com", UserRole::User, Some(group_id));
        let second_member = user("Bob Member", "bob@example.com", UserRole::User, Some(group_id));
        let ungrouped = user("Carol Solo", "carol@example.com", UserRole::User, None);
        let admin = user("Dana Admin", "dana@example.com", UserRole::Admin, None);

        let users = InMemoryUserStore::new()
            .with_user(member.clone())
            .with_user(second_member.clone())
            .with_user(ungrouped.clone())
            .with_user(admin.clone());

        Self {
            group_id,
            empty_group_id,
            course_a,
            course_b,
            member,
            second_member,
            ungrouped,
            admin,
            groups: vec![
                sample_group(group_id, "Sales", "SALES"),
                sample_group(empty_group_id, "Support", "SUPPORT"),
            ],
            catalog,
            users,
            videos,
        }
    }

    /// Video ids of `course_id` as seeded, in catalog order.
    pub fn video_ids(&self, course_id: Uuid) -> Vec<Uuid> {
        self.videos.get(&course_id).cloned().unwrap_or_default()
    }

    /// Handle sharing state with every other handle from this fixture.
    pub fn catalog(&self) -> InMemoryCatalog {
        self.catalog.clone()
    }

    pub fn users(&self) -> InMemoryUserStore {
        self.users.clone()
    }

    pub fn groups(&self) -> StubGroupQuery {
        StubGroupQuery::with_groups(self.groups.clone())
    }

    /// A fresh log store that knows the fixture's accounts.
    pub fn progress_store(&self) -> InMemoryProgress {
        let learners = self
            .users
            .all()
            .into_iter()
            .map(|u| LearnerSummary {
                id: u.id,
                name: u.name,
                email: u.email,
                role: u.role,
                group_id: u.group_id,
            })
            .collect();

        InMemoryProgress::new(learners)
    }
}

fn seed_curriculum(catalog: &InMemoryCatalog, course_id: Uuid, title: &str, count: usize) -> Vec<Uuid> {
    let curriculum_id = catalog
        .add_curriculum(course_id, title)
        .expect("course was just added");

    (0..count)
        .map(|n| {
            catalog
                .add_video(curriculum_id, &format!("{} {}", title, n + 1))
                .expect("curriculum was just added")
        })
        .collect()
}

fn user(name: &str, email: &str, role: UserRole, group_id: Option<Uuid>) -> UserQueryResult {
    UserQueryResult {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: name.to_string(),
        password_hash: "hashed:password123".to_string(),
        role,
        group_id,
        is_first_login: false,
        last_login_at: None,
        created_at: Utc::now(),
    }
}
