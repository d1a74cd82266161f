use crate::routes::{course, health, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        course::create_course,
        course::get_courses,
        course::get_course_by_id,
        course::update_course,
        course::delete_course,
        course::assign_faculties,
        course::remove_faculties
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Courses", description = "Courses, their prerequisites and assigned faculties"),
    ),
    info(
        title = "Course API",
        version = "1.0.0",
        description = "Academic course catalogue API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_course_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/api/v1/courses",
            "/api/v1/courses/create-course",
            "/api/v1/courses/{id}",
            "/api/v1/courses/{id}/assign-faculties",
            "/api/v1/courses/{id}/remove-faculties",
        ] {
            assert!(paths.contains(&path), "{path} missing from the OpenAPI document");
        }
    }

    #[test]
    fn test_list_parameters_use_query_string_names() {
        let doc = ApiDoc::openapi();
        let names: Vec<String> = doc.paths.paths["/api/v1/courses"]
            .get
            .as_ref()
            .and_then(|operation| operation.parameters.as_ref())
            .map(|parameters| parameters.iter().map(|p| p.name.clone()).collect())
            .unwrap_or_default();

        for name in ["searchTerm", "page", "limit", "sortBy", "sortOrder"] {
            assert!(names.iter().any(|n| n == name), "{name} not documented");
        }
    }
}
