use crate::{
    entities::{course_to_prerequisites, courses},
    error::{ServiceError, ServiceResult},
};
use chrono::Utc;
use futures::try_join;
use log::{debug, info};
use models::course::{CourseChanges, NewCourse};
use sea_orm::{
    ActiveValue::{self, NotSet, Set},
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait, Value,
};
use std::{collections::HashMap, sync::Arc};
use uuid::Uuid;

/// An edge from a course to one of its prerequisites
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrerequisiteLink {
    pub course_id: Uuid,
    pub pre_requisite_id: Uuid,
    pub pre_requisite: courses::Model,
}

/// An edge from a course that requires this one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependentLink {
    pub course_id: Uuid,
    pub pre_requisite_id: Uuid,
    pub course: courses::Model,
}

/// A course together with both directions of its prerequisite graph
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseGraph {
    pub course: courses::Model,
    /// Courses this course requires
    pub pre_requisite: Vec<PrerequisiteLink>,
    /// Courses that require this course
    pub pre_requisite_for: Vec<DependentLink>,
}

/// Owns every write to courses, their prerequisite edges and their faculty
/// assignments.
///
/// Clones share one connection pool.
#[derive(Clone, Debug)]
pub struct CourseService {
    db: Arc<DatabaseConnection>,
}

fn set_if_present<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    value.map_or(NotSet, Set)
}

impl CourseService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    /// Inserts a course and its prerequisite edges in one transaction, then
    /// reads the course back with its graph.
    ///
    /// The read happens after commit, so a course deleted in between is
    /// reported as a failed creation.
    pub async fn create_course(&self, course: NewCourse) -> ServiceResult<CourseGraph> {
        let course_id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        let txn = self.db.begin().await?;

        let inserted = courses::Entity::insert(courses::ActiveModel {
            id: Set(course_id),
            title: Set(course.title),
            code: Set(course.code),
            credits: Set(course.credits),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(&txn)
        .await?;

        if inserted == 0 {
            return Err(ServiceError::bad_request("Unable to create course"));
        }

        Self::insert_prerequisites(&txn, course_id, &course.pre_requisites).await?;
        txn.commit().await?;

        info!(
            "Created course {course_id} with {} prerequisites",
            course.pre_requisites.len()
        );

        self.find_course_graph(course_id)
            .await?
            .ok_or_else(|| ServiceError::bad_request("Unable to create course"))
    }

    /// Applies scalar changes and prerequisite edge diffs in one transaction,
    /// then reads the course back with its graph.
    pub async fn update_course(
        &self,
        id: Uuid,
        changes: CourseChanges,
    ) -> ServiceResult<CourseGraph> {
        let diff = changes.prerequisite_diff();
        if diff.removed.contains(&id) || diff.added.contains(&id) {
            return Err(ServiceError::bad_request(
                "A course cannot be its own prerequisite",
            ));
        }

        let txn = self.db.begin().await?;

        let result = courses::Entity::update_many()
            .set(courses::ActiveModel {
                title: set_if_present(changes.title),
                code: set_if_present(changes.code),
                credits: set_if_present(changes.credits),
                updated_at: Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .filter(courses::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::bad_request("Unable to update course"));
        }

        // Removals run before additions, so an id on both sides ends up linked
        if !diff.removed.is_empty() {
            let removed = course_to_prerequisites::Entity::delete_many()
                .filter(course_to_prerequisites::Column::CourseId.eq(id))
                .filter(course_to_prerequisites::Column::PreRequisiteId.is_in(diff.removed))
                .exec(&txn)
                .await?;
            debug!("Removed {} prerequisite edges from {id}", removed.rows_affected);
        }
        Self::insert_prerequisites(&txn, id, &diff.added).await?;

        txn.commit().await?;
        info!("Updated course {id}");

        self.find_course_graph(id)
            .await?
            .ok_or_else(|| ServiceError::bad_request("Unable to update course"))
    }

    /// Get a single course with its prerequisite graph
    pub async fn get_course(&self, id: Uuid) -> ServiceResult<CourseGraph> {
        self.find_course_graph(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Course not found"))
    }

    /// Deletes a course. Its edges and faculty assignments go with it through
    /// the foreign keys.
    pub async fn delete_course(&self, id: Uuid) -> ServiceResult<courses::Model> {
        let course = courses::Entity::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| ServiceError::not_found("Course not found"))?;

        courses::Entity::delete_by_id(id).exec(self.connection()).await?;
        info!("Deleted course {id}");

        Ok(course)
    }

    async fn insert_prerequisites(
        txn: &DatabaseTransaction,
        course_id: Uuid,
        pre_requisites: &[Uuid],
    ) -> ServiceResult<()> {
        if pre_requisites.is_empty() {
            return Ok(());
        }

        let edges = pre_requisites
            .iter()
            .map(|&pre_requisite_id| course_to_prerequisites::ActiveModel {
                course_id: Set(course_id),
                pre_requisite_id: Set(pre_requisite_id),
            });

        let inserted = course_to_prerequisites::Entity::insert_many(edges)
            .exec_without_returning(txn)
            .await?;
        debug!("Inserted {inserted} prerequisite edges for {course_id}");

        Ok(())
    }

    /// Loads a course, the courses it requires, and the courses requiring it
    pub(crate) async fn find_course_graph(&self, id: Uuid) -> ServiceResult<Option<CourseGraph>> {
        let Some(course) = courses::Entity::find_by_id(id).one(self.connection()).await? else {
            return Ok(None);
        };

        let (outgoing, incoming) = try_join!(
            course_to_prerequisites::Entity::find()
                .filter(course_to_prerequisites::Column::CourseId.eq(id))
                .order_by_asc(course_to_prerequisites::Column::PreRequisiteId)
                .all(self.connection()),
            course_to_prerequisites::Entity::find()
                .filter(course_to_prerequisites::Column::PreRequisiteId.eq(id))
                .order_by_asc(course_to_prerequisites::Column::CourseId)
                .all(self.connection()),
        )?;

        let related_ids: Vec<Uuid> = outgoing
            .iter()
            .map(|edge| edge.pre_requisite_id)
            .chain(incoming.iter().map(|edge| edge.course_id))
            .collect();

        // Batch fetch every course on the other end of an edge
        let related: HashMap<Uuid, courses::Model> = if related_ids.is_empty() {
            HashMap::new()
        } else {
            courses::Entity::find()
                .filter(courses::Column::Id.is_in(related_ids))
                .all(self.connection())
                .await?
                .into_iter()
                .map(|course| (course.id, course))
                .collect()
        };

        let pre_requisite = outgoing
            .into_iter()
            .filter_map(|edge| {
                related
                    .get(&edge.pre_requisite_id)
                    .cloned()
                    .map(|pre_requisite| PrerequisiteLink {
                        course_id: edge.course_id,
                        pre_requisite_id: edge.pre_requisite_id,
                        pre_requisite,
                    })
            })
            .collect();

        let pre_requisite_for = incoming
            .into_iter()
            .filter_map(|edge| {
                related
                    .get(&edge.course_id)
                    .cloned()
                    .map(|dependent| DependentLink {
                        course_id: edge.course_id,
                        pre_requisite_id: edge.pre_requisite_id,
                        course: dependent,
                    })
            })
            .collect();

        Ok(Some(CourseGraph {
            course,
            pre_requisite,
            pre_requisite_for,
        }))
    }
}
