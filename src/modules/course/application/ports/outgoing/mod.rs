pub mod catalog_query;
pub mod course_repository;

pub use catalog_query::{CatalogQuery, CatalogQueryError};
pub use course_repository::{
    CourseRepository, CourseRepositoryError, NewCourse, NewCurriculum, NewVideo,
};
