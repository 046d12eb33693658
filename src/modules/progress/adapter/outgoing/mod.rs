pub mod progress_query_postgres;
pub mod sea_orm_entity;
pub mod viewing_log_repository_postgres;

pub use progress_query_postgres::ProgressQueryPostgres;
pub use viewing_log_repository_postgres::ViewingLogRepositoryPostgres;
