pub mod progress_query;
pub mod viewing_log_repository;

pub use progress_query::{ProgressQuery, ProgressQueryError};
pub use viewing_log_repository::{ViewingEvent, ViewingLogRepository, ViewingLogRepositoryError};
