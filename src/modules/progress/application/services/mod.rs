mod fetch_group_progress;
mod fetch_my_progress;
mod fetch_progress_stats;
mod record_viewing;

pub use fetch_group_progress::FetchGroupProgressService;
pub use fetch_my_progress::FetchMyProgressService;
pub use fetch_progress_stats::FetchProgressStatsService;
pub use record_viewing::RecordViewingService;

use uuid::Uuid;

use crate::course::application::domain::CourseTree;

fn catalog_video_ids(courses: &[CourseTree]) -> Vec<Uuid> {
    courses.iter().flat_map(CourseTree::video_ids).collect()
}
