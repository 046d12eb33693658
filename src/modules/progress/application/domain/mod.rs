pub mod progress;

pub use progress::{
    compute_user_progress, percentage, CourseSummary, GroupProgressReport, LearnerSummary,
    MemberProgress, UserProgress, ViewingLog,
};
