mod course_access_guard;

pub use course_access_guard::CourseAccessGuard;
