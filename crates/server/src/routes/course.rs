use super::AppState;
use crate::{
    dtos::course::{CourseDetailResponse, CourseFacultyResponse, CourseListParams, CourseResponse},
    error::ApiError,
    response::ApiResponse,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use models::{
    course::{CreateCourseRequest, FacultyAssignmentRequest, UpdateCourseRequest},
    course_query::CourseListQuery,
};
use uuid::Uuid;

/// Create a course with its prerequisites
#[utoipa::path(
    post,
    path = "/api/v1/courses/create-course",
    request_body = CreateCourseRequest,
    responses(
        (status = 200, description = "Course created successfully", body = CourseDetailResponse),
        (status = 400, description = "Invalid course or unknown prerequisite"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    body: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<ApiResponse<CourseDetailResponse>, ApiError> {
    let Json(request) = body?;
    let course = request.validate()?;
    let created = state.courses.create_course(course).await?;

    Ok(ApiResponse::ok(
        "Course created successfully",
        created.into(),
    ))
}

/// Get paginated list of courses
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    params(CourseListParams),
    responses(
        (status = 200, description = "Course data fetched", body = Vec<CourseResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<ApiResponse<Vec<CourseResponse>>, ApiError> {
    let Query(pairs) = params?;
    let query = CourseListQuery::from_pairs(pairs)?;
    let page = state
        .courses
        .get_courses(&query.filters, &query.options)
        .await?;

    let data = page.data.into_iter().map(Into::into).collect();
    Ok(ApiResponse::ok("Course data fetched!!", data).with_meta(page.meta))
}

/// Get a course with the courses it requires and the courses requiring it
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course fetched successfully", body = CourseDetailResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<CourseDetailResponse>, ApiError> {
    let Path(id) = id?;
    let course = state.courses.get_course(id).await?;

    Ok(ApiResponse::ok("Course fetched successfully", course.into()))
}

/// Update a course and add or remove prerequisite edges
#[utoipa::path(
    patch,
    path = "/api/v1/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course id")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated successfully", body = CourseDetailResponse),
        (status = 400, description = "Invalid changes or unknown course"),
        (status = 409, description = "Prerequisite already linked"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateCourseRequest>, JsonRejection>,
) -> Result<ApiResponse<CourseDetailResponse>, ApiError> {
    let Path(id) = id?;
    let Json(request) = body?;
    let changes = request.validate()?;
    let updated = state.courses.update_course(id, changes).await?;

    Ok(ApiResponse::ok(
        "Course updated successfully",
        updated.into(),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Course deleted successfully", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<CourseResponse>, ApiError> {
    let Path(id) = id?;
    let deleted = state.courses.delete_course(id).await?;

    Ok(ApiResponse::ok(
        "Course deleted successfully",
        deleted.into(),
    ))
}

/// Assign faculties to a course
#[utoipa::path(
    post,
    path = "/api/v1/courses/{id}/assign-faculties",
    params(
        ("id" = Uuid, Path, description = "Course id")
    ),
    request_body = FacultyAssignmentRequest,
    responses(
        (status = 200, description = "Every faculty now assigned to the course", body = Vec<CourseFacultyResponse>),
        (status = 400, description = "Missing or unknown faculties"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn assign_faculties(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<FacultyAssignmentRequest>, JsonRejection>,
) -> Result<ApiResponse<Vec<CourseFacultyResponse>>, ApiError> {
    let Path(id) = id?;
    let Json(request) = body?;
    let faculty_ids = request.validate()?;
    let assignments = state.courses.assign_faculties(id, &faculty_ids).await?;

    Ok(ApiResponse::ok(
        "Course faculty assigned successfully",
        assignments.into_iter().map(Into::into).collect(),
    ))
}

/// Remove faculties from a course
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}/remove-faculties",
    params(
        ("id" = Uuid, Path, description = "Course id")
    ),
    request_body = FacultyAssignmentRequest,
    responses(
        (status = 200, description = "Faculties still assigned to the course", body = Vec<CourseFacultyResponse>),
        (status = 400, description = "Missing faculties"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn remove_faculties(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<FacultyAssignmentRequest>, JsonRejection>,
) -> Result<ApiResponse<Vec<CourseFacultyResponse>>, ApiError> {
    let Path(id) = id?;
    let Json(request) = body?;
    let faculty_ids = request.validate()?;
    let assignments = state.courses.remove_faculties(id, &faculty_ids).await?;

    Ok(ApiResponse::ok(
        "Course faculty removed successfully",
        assignments.into_iter().map(Into::into).collect(),
    ))
}
