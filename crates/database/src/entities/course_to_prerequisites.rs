use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Directed edge: `course_id` requires `pre_requisite_id`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_to_prerequisites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub pre_requisite_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::PreRequisiteId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    PreRequisite,
}

impl ActiveModelBehavior for ActiveModel {}
