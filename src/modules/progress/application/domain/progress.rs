use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::group::application::ports::outgoing::GroupView;

/// One row per (user, video). `watched_seconds` never decreases and
/// `is_completed` never goes back to false.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewingLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub video_id: Uuid,
    pub watched_seconds: i32,
    pub is_completed: bool,
    pub last_watched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub total_videos: u32,
    pub watched_videos: u32,
    pub completed_videos: u32,
    /// 0..=100
    pub completion_rate: u32,
    /// 0..=100
    pub watch_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LearnerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub group_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberProgress {
    pub user: LearnerSummary,
    pub progress: UserProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
    pub video_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupProgressReport {
    pub group: GroupView,
    pub courses: Vec<CourseSummary>,
    pub members: Vec<MemberProgress>,
}

/// `round(100 * part / total)` with halves rounded up, 0 when `total` is 0.
pub fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (part, total) = (u64::from(part), u64::from(total));
    ((200 * part + total) / (2 * total)) as u32
}

/// Progress of `user_id` over `catalog`.
///
/// Duplicate catalog ids count once. Logs of other users and logs for videos
/// outside the catalog are ignored.
pub fn compute_user_progress<I>(user_id: Uuid, catalog: I, logs: &[ViewingLog]) -> UserProgress
where
    I: IntoIterator<Item = Uuid>,
{
    let catalog: HashSet<Uuid> = catalog.into_iter().collect();

    let (watched, completed) = logs
        .iter()
        .filter(|log| log.user_id == user_id && catalog.contains(&log.video_id))
        .fold((0u32, 0u32), |(watched, completed), log| {
            (
                watched + u32::from(log.watched_seconds > 0),
                completed + u32::from(log.is_completed),
            )
        });

    let total = catalog.len() as u32;
    UserProgress {
        total_videos: total,
        watched_videos: watched,
        completed_videos: completed,
        completion_rate: percentage(completed, total),
        watch_rate: percentage(watched, total),
    }
}
