pub mod group_courses;
pub mod groups;
