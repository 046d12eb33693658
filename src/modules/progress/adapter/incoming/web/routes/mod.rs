pub mod fetch_group_progress;
pub mod fetch_my_progress;
pub mod fetch_progress_stats;
pub mod record_viewing;

pub use fetch_group_progress::*;
pub use fetch_my_progress::*;
pub use fetch_progress_stats::*;
pub use record_viewing::*;
