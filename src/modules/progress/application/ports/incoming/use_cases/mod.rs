mod fetch_group_progress;
mod fetch_my_progress;
mod fetch_progress_stats;
mod record_viewing;

pub use fetch_group_progress::{FetchGroupProgressError, FetchGroupProgressUseCase};
pub use fetch_my_progress::{FetchMyProgressError, FetchMyProgressUseCase};
pub use fetch_progress_stats::{FetchProgressStatsError, FetchProgressStatsUseCase};
pub use record_viewing::{
    RecordViewingCommand, RecordViewingCommandError, RecordViewingError, RecordViewingUseCase,
};
