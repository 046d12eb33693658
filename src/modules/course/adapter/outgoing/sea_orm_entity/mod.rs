pub mod courses;
pub mod curriculums;
pub mod videos;
