use super::course::CourseService;
use crate::{
    entities::{course_faculties, courses, faculties},
    error::{ServiceError, ServiceResult},
};
use log::info;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, sea_query::OnConflict,
};
use uuid::Uuid;

/// A faculty member assigned to a course
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseFacultyAssignment {
    pub course_id: Uuid,
    pub faculty_id: Uuid,
    pub faculty: Option<faculties::Model>,
}

impl CourseService {
    /// Assigns faculties to a course and returns every current assignment.
    ///
    /// Faculties already assigned are left as they are.
    pub async fn assign_faculties(
        &self,
        course_id: Uuid,
        faculty_ids: &[Uuid],
    ) -> ServiceResult<Vec<CourseFacultyAssignment>> {
        self.ensure_course_exists(course_id).await?;

        if !faculty_ids.is_empty() {
            let rows = faculty_ids
                .iter()
                .map(|&faculty_id| course_faculties::ActiveModel {
                    course_id: Set(course_id),
                    faculty_id: Set(faculty_id),
                });

            let inserted = course_faculties::Entity::insert_many(rows)
                .on_conflict(
                    OnConflict::columns([
                        course_faculties::Column::CourseId,
                        course_faculties::Column::FacultyId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.connection())
                .await?;
            info!("Assigned {inserted} faculties to course {course_id}");
        }

        self.course_faculties(course_id).await
    }

    /// Removes faculties from a course and returns the remaining assignments
    pub async fn remove_faculties(
        &self,
        course_id: Uuid,
        faculty_ids: &[Uuid],
    ) -> ServiceResult<Vec<CourseFacultyAssignment>> {
        self.ensure_course_exists(course_id).await?;

        if !faculty_ids.is_empty() {
            let removed = course_faculties::Entity::delete_many()
                .filter(course_faculties::Column::CourseId.eq(course_id))
                .filter(course_faculties::Column::FacultyId.is_in(faculty_ids.iter().copied()))
                .exec(self.connection())
                .await?;
            info!(
                "Removed {} faculties from course {course_id}",
                removed.rows_affected
            );
        }

        self.course_faculties(course_id).await
    }

    async fn ensure_course_exists(&self, course_id: Uuid) -> ServiceResult<()> {
        courses::Entity::find_by_id(course_id)
            .one(self.connection())
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Course not found"))
    }

    async fn course_faculties(&self, course_id: Uuid) -> ServiceResult<Vec<CourseFacultyAssignment>> {
        let assignments = course_faculties::Entity::find()
            .filter(course_faculties::Column::CourseId.eq(course_id))
            .order_by_asc(course_faculties::Column::FacultyId)
            .find_also_related(faculties::Entity)
            .all(self.connection())
            .await?
            .into_iter()
            .map(|(assignment, faculty)| CourseFacultyAssignment {
                course_id: assignment.course_id,
                faculty_id: assignment.faculty_id,
                faculty,
            })
            .collect();

        Ok(assignments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_time, seed_course, seed_faculty, setup_db};

    fn faculty_ids(assignments: &[CourseFacultyAssignment]) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = assignments.iter().map(|a| a.faculty_id).collect();
        ids.sort();
        ids
    }

    fn sorted(mut ids: Vec<Uuid>) -> Vec<Uuid> {
        ids.sort();
        ids
    }

    #[tokio::test]
    async fn test_assign_returns_full_set_with_faculty() {
        let db = setup_db().await;
        let course = seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        let ada = seed_faculty(&db, "F-0001", "Ada").await;
        let alan = seed_faculty(&db, "F-0002", "Alan").await;
        let service = CourseService::new(db);

        service.assign_faculties(course.id, &[ada.id]).await.unwrap();
        let assignments = service.assign_faculties(course.id, &[alan.id]).await.unwrap();

        assert_eq!(faculty_ids(&assignments), sorted(vec![ada.id, alan.id]));
        for assignment in &assignments {
            let faculty = assignment.faculty.as_ref().unwrap();
            assert_eq!(faculty.id, assignment.faculty_id);
        }
    }

    #[tokio::test]
    async fn test_assign_ignores_existing_assignment() {
        let db = setup_db().await;
        let course = seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        let ada = seed_faculty(&db, "F-0001", "Ada").await;
        let service = CourseService::new(db);

        service.assign_faculties(course.id, &[ada.id]).await.unwrap();
        let assignments = service.assign_faculties(course.id, &[ada.id]).await.unwrap();

        assert_eq!(faculty_ids(&assignments), vec![ada.id]);
    }

    #[tokio::test]
    async fn test_remove_returns_remaining_set() {
        let db = setup_db().await;
        let course = seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        let ada = seed_faculty(&db, "F-0001", "Ada").await;
        let alan = seed_faculty(&db, "F-0002", "Alan").await;
        let grace = seed_faculty(&db, "F-0003", "Grace").await;
        let service = CourseService::new(db);

        service
            .assign_faculties(course.id, &[ada.id, alan.id, grace.id])
            .await
            .unwrap();
        let remaining = service
            .remove_faculties(course.id, &[ada.id, grace.id])
            .await
            .unwrap();

        assert_eq!(faculty_ids(&remaining), vec![alan.id]);
    }

    #[tokio::test]
    async fn test_empty_list_only_reads() {
        let db = setup_db().await;
        let course = seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        let ada = seed_faculty(&db, "F-0001", "Ada").await;
        let service = CourseService::new(db);

        service.assign_faculties(course.id, &[ada.id]).await.unwrap();

        let assigned = service.assign_faculties(course.id, &[]).await.unwrap();
        let remaining = service.remove_faculties(course.id, &[]).await.unwrap();
        assert_eq!(assigned, remaining);
        assert_eq!(faculty_ids(&remaining), vec![ada.id]);
    }

    #[tokio::test]
    async fn test_unknown_course() {
        let service = CourseService::new(setup_db().await);
        let err = service
            .assign_faculties(Uuid::new_v4(), &[Uuid::new_v4()])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_faculty_is_a_store_error() {
        let db = setup_db().await;
        let course = seed_course(&db, "Algorithms", "CSE-201", base_time()).await;
        let service = CourseService::new(db);

        let err = service
            .assign_faculties(course.id, &[Uuid::new_v4()])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Database(_)));
    }
}
