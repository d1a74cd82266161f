pub mod course;
pub mod course_faculty;
pub mod query_course;
