use crate::doc::ApiDoc;
use axum::{
    Json, Router,
    routing::{delete, get, post},
};
use database::services::course::CourseService;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;

pub mod course;
pub mod health;
pub mod root;

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseService,
}

impl AppState {
    pub fn new(courses: CourseService) -> Self {
        Self { courses }
    }
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi))
        .route("/api/v1/courses", get(course::get_courses))
        .route("/api/v1/courses/create-course", post(course::create_course))
        .route(
            "/api/v1/courses/{id}",
            get(course::get_course_by_id)
                .patch(course::update_course)
                .delete(course::delete_course),
        )
        .route(
            "/api/v1/courses/{id}/assign-faculties",
            post(course::assign_faculties),
        )
        .route(
            "/api/v1/courses/{id}/remove-faculties",
            delete(course::remove_faculties),
        )
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
