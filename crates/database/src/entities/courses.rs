use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

// Prerequisite edges point at courses from two columns, so they are loaded
// explicitly by the course service rather than through `Related`.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_faculties::Entity")]
    CourseFaculties,
}

impl Related<super::course_faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseFaculties.def()
    }
}

// Many-to-many relationship with faculties
impl Related<super::faculties::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_faculties::Relation::Faculty.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_faculties::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
