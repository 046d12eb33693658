pub mod access;
pub mod catalog;

pub use access::{AccessDecision, CatalogScope, DenyReason};
pub use catalog::{
    assemble_course_trees, CourseRecord, CourseTree, CurriculumRecord, CurriculumTree, VideoItem,
};
