pub mod course_faculties;
pub mod course_to_prerequisites;
pub mod courses;
pub mod faculties;
