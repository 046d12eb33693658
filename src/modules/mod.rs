pub mod auth;
pub mod course;
pub mod group;
pub mod progress;
