use chrono::NaiveDateTime;
use database::{
    entities::{courses, faculties},
    services::{
        course::{CourseGraph, DependentLink, PrerequisiteLink},
        course_faculty::CourseFacultyAssignment,
    },
};
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Edge to a course this course requires
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteResponse {
    pub course_id: Uuid,
    pub pre_requisite_id: Uuid,
    pub pre_requisite: CourseResponse,
}

/// Edge from a course that requires this course
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependentResponse {
    pub course_id: Uuid,
    pub pre_requisite_id: Uuid,
    pub course: CourseResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub pre_requisite: Vec<PrerequisiteResponse>,
    pub pre_requisite_for: Vec<DependentResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacultyResponse {
    pub id: Uuid,
    pub faculty_id: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub contact_no: String,
    pub designation: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseFacultyResponse {
    pub course_id: Uuid,
    pub faculty_id: Uuid,
    pub faculty: Option<FacultyResponse>,
}

/// Query parameters accepted by `GET /api/v1/courses`. Any other key is rejected.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct CourseListParams {
    /// Case-insensitive substring matched against title and code
    pub search_term: Option<String>,
    pub title: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    /// Defaults to 1
    pub page: Option<u64>,
    /// Defaults to 10
    pub limit: Option<u64>,
    /// One of `title`, `code`, `credits`, `createdAt`, `updatedAt`
    pub sort_by: Option<String>,
    /// `asc` or `desc`; only applied together with `sortBy`
    pub sort_order: Option<String>,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            title: course.title,
            code: course.code,
            credits: course.credits,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

impl From<PrerequisiteLink> for PrerequisiteResponse {
    fn from(link: PrerequisiteLink) -> Self {
        Self {
            course_id: link.course_id,
            pre_requisite_id: link.pre_requisite_id,
            pre_requisite: link.pre_requisite.into(),
        }
    }
}

impl From<DependentLink> for DependentResponse {
    fn from(link: DependentLink) -> Self {
        Self {
            course_id: link.course_id,
            pre_requisite_id: link.pre_requisite_id,
            course: link.course.into(),
        }
    }
}

impl From<CourseGraph> for CourseDetailResponse {
    fn from(graph: CourseGraph) -> Self {
        let CourseGraph {
            course,
            pre_requisite,
            pre_requisite_for,
        } = graph;

        Self {
            id: course.id,
            title: course.title,
            code: course.code,
            credits: course.credits,
            created_at: course.created_at,
            updated_at: course.updated_at,
            pre_requisite: pre_requisite.into_iter().map(Into::into).collect(),
            pre_requisite_for: pre_requisite_for.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<faculties::Model> for FacultyResponse {
    fn from(faculty: faculties::Model) -> Self {
        Self {
            id: faculty.id,
            faculty_id: faculty.faculty_id,
            first_name: faculty.first_name,
            middle_name: faculty.middle_name,
            last_name: faculty.last_name,
            email: faculty.email,
            contact_no: faculty.contact_no,
            designation: faculty.designation,
        }
    }
}

impl From<CourseFacultyAssignment> for CourseFacultyResponse {
    fn from(assignment: CourseFacultyAssignment) -> Self {
        Self {
            course_id: assignment.course_id,
            faculty_id: assignment.faculty_id,
            faculty: assignment.faculty.map(Into::into),
        }
    }
}
