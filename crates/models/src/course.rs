use crate::validation::{ValidationError, check_not_blank};
use serde::Deserialize;
use std::collections::HashSet;
use uuid::Uuid;

/// One entry of `preRequisiteCourses` in a create or update body
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PrerequisiteCourseRequest {
    /// The prerequisite course
    pub course_id: Uuid,
    /// When true the edge is removed instead of added (update only)
    #[serde(default)]
    pub is_deleted: Option<bool>,
}

impl PrerequisiteCourseRequest {
    pub fn is_deleted(&self) -> bool {
        self.is_deleted.unwrap_or(false)
    }
}

/// Body of a course creation request, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    pub pre_requisite_courses: Option<Vec<PrerequisiteCourseRequest>>,
}

/// Body of a course update request, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    pub pre_requisite_courses: Option<Vec<PrerequisiteCourseRequest>>,
}

/// Body of the assign/remove faculty requests, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FacultyAssignmentRequest {
    pub faculties: Option<Vec<Uuid>>,
}

/// A validated course ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub code: String,
    pub credits: i32,
    /// Prerequisite course ids, without duplicates
    pub pre_requisites: Vec<Uuid>,
}

/// A validated partial update of a course
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseChanges {
    pub title: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    pub pre_requisite_courses: Vec<PrerequisiteCourseRequest>,
}

/// Edge instructions of an update split by direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteDiff {
    pub removed: Vec<Uuid>,
    pub added: Vec<Uuid>,
}

impl CourseChanges {
    /// Splits the edge instructions into removals and additions.
    ///
    /// Order of first appearance is kept and repeats within a side are dropped.
    /// An id may appear on both sides.
    pub fn prerequisite_diff(&self) -> PrerequisiteDiff {
        let mut diff = PrerequisiteDiff::default();
        let mut seen_removed = HashSet::new();
        let mut seen_added = HashSet::new();

        for entry in &self.pre_requisite_courses {
            if entry.is_deleted() {
                if seen_removed.insert(entry.course_id) {
                    diff.removed.push(entry.course_id);
                }
            } else if seen_added.insert(entry.course_id) {
                diff.added.push(entry.course_id);
            }
        }

        diff
    }
}

fn check_credits(errors: &mut ValidationError, credits: Option<i32>) {
    if let Some(credits) = credits
        && credits < 0
    {
        errors.push("credits", "Credits must not be negative");
    }
}

impl CreateCourseRequest {
    pub fn validate(self) -> Result<NewCourse, ValidationError> {
        let mut errors = ValidationError::default();

        match self.title.as_deref() {
            None => errors.push("title", "Title is required"),
            title => check_not_blank(&mut errors, "title", title, "Title is required"),
        }
        match self.code.as_deref() {
            None => errors.push("code", "Code is required"),
            code => check_not_blank(&mut errors, "code", code, "Code is required"),
        }
        check_credits(&mut errors, self.credits);

        let mut seen = HashSet::new();
        let mut pre_requisites = Vec::new();
        for (idx, entry) in self.pre_requisite_courses.unwrap_or_default().iter().enumerate() {
            if seen.insert(entry.course_id) {
                pre_requisites.push(entry.course_id);
            } else {
                errors.push(
                    format!("preRequisiteCourses.{idx}.courseId"),
                    "Prerequisite course is listed more than once",
                );
            }
        }

        errors.into_result(NewCourse {
            title: self.title.unwrap_or_default(),
            code: self.code.unwrap_or_default(),
            credits: self.credits.unwrap_or(0),
            pre_requisites,
        })
    }
}

impl UpdateCourseRequest {
    pub fn validate(self) -> Result<CourseChanges, ValidationError> {
        let mut errors = ValidationError::default();

        check_not_blank(&mut errors, "title", self.title.as_deref(), "Title must not be empty");
        check_not_blank(&mut errors, "code", self.code.as_deref(), "Code must not be empty");
        check_credits(&mut errors, self.credits);

        errors.into_result(CourseChanges {
            title: self.title,
            code: self.code,
            credits: self.credits,
            pre_requisite_courses: self.pre_requisite_courses.unwrap_or_default(),
        })
    }
}

impl FacultyAssignmentRequest {
    pub fn validate(self) -> Result<Vec<Uuid>, ValidationError> {
        self.faculties
            .ok_or_else(|| ValidationError::single("faculties", "Faculties are required"))
    }
}
