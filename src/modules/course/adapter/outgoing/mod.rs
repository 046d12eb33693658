pub mod catalog_query_postgres;
pub mod course_repository_postgres;
pub mod sea_orm_entity;

pub use catalog_query_postgres::CatalogQueryPostgres;
pub use course_repository_postgres::CourseRepositoryPostgres;
