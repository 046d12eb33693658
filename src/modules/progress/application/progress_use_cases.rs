use std::sync::Arc;

use crate::progress::application::ports::incoming::use_cases::{
    FetchGroupProgressUseCase, FetchMyProgressUseCase, FetchProgressStatsUseCase,
    RecordViewingUseCase,
};

#[derive(Clone)]
pub struct ProgressUseCases {
    pub record_viewing: Arc<dyn RecordViewingUseCase + Send + Sync>,
    pub my_progress: Arc<dyn FetchMyProgressUseCase + Send + Sync>,
    pub stats: Arc<dyn FetchProgressStatsUseCase + Send + Sync>,
    pub group_progress: Arc<dyn FetchGroupProgressUseCase + Send + Sync>,
}
