use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Teaching staff, owned by the faculty module. Courses only read it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "faculties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub faculty_id: String, // Staff code, e.g. "F-0001"
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub contact_no: String,
    pub designation: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

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

// Many-to-many relationship with courses
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_faculties::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_faculties::Relation::Faculty.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
