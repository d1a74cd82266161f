//! In-memory SQLite fixtures for tests in this and dependent crates.

use crate::entities::{courses, faculties};
use chrono::{NaiveDate, NaiveDateTime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveValue::Set, ConnectOptions, Database, DatabaseConnection, EntityTrait};
use uuid::Uuid;

/// A fresh in-memory SQLite database with the production schema.
///
/// One pooled connection, since every SQLite memory connection is its own database.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 6)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .unwrap()
}

pub async fn seed_course(
    db: &DatabaseConnection,
    title: &str,
    code: &str,
    created_at: NaiveDateTime,
) -> courses::Model {
    let model = courses::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        code: code.to_owned(),
        credits: 3,
        created_at,
        updated_at: created_at,
    };

    courses::Entity::insert(courses::ActiveModel {
        id: Set(model.id),
        title: Set(model.title.clone()),
        code: Set(model.code.clone()),
        credits: Set(model.credits),
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
    })
    .exec_without_returning(db)
    .await
    .unwrap();

    model
}

pub async fn seed_faculty(
    db: &DatabaseConnection,
    faculty_code: &str,
    first_name: &str,
) -> faculties::Model {
    let model = faculties::Model {
        id: Uuid::new_v4(),
        faculty_id: faculty_code.to_owned(),
        first_name: first_name.to_owned(),
        middle_name: None,
        last_name: "Lecturer".to_owned(),
        email: format!("{}@example.edu", first_name.to_lowercase()),
        contact_no: "555-0100".to_owned(),
        designation: "Lecturer".to_owned(),
        created_at: base_time(),
        updated_at: base_time(),
    };

    faculties::Entity::insert(faculties::ActiveModel {
        id: Set(model.id),
        faculty_id: Set(model.faculty_id.clone()),
        first_name: Set(model.first_name.clone()),
        middle_name: Set(model.middle_name.clone()),
        last_name: Set(model.last_name.clone()),
        email: Set(model.email.clone()),
        contact_no: Set(model.contact_no.clone()),
        designation: Set(model.designation.clone()),
        created_at: Set(model.created_at),
        updated_at: Set(model.updated_at),
    })
    .exec_without_returning(db)
    .await
    .unwrap();

    model
}
