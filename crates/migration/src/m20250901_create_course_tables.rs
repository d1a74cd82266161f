use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(
                        ColumnDef::new(Courses::Credits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create faculties table (owned by the faculty module, read by courses)
        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Faculties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Faculties::FacultyId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Faculties::FirstName).string().not_null())
                    .col(ColumnDef::new(Faculties::MiddleName).string())
                    .col(ColumnDef::new(Faculties::LastName).string().not_null())
                    .col(ColumnDef::new(Faculties::Email).string().not_null())
                    .col(ColumnDef::new(Faculties::ContactNo).string().not_null())
                    .col(ColumnDef::new(Faculties::Designation).string().not_null())
                    .col(ColumnDef::new(Faculties::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Faculties::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course_to_prerequisites table (self-referential many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseToPrerequisites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseToPrerequisites::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseToPrerequisites::PreRequisiteId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseToPrerequisites::CourseId)
                            .col(CourseToPrerequisites::PreRequisiteId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_to_prerequisites-course_id")
                            .from(
                                CourseToPrerequisites::Table,
                                CourseToPrerequisites::CourseId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_to_prerequisites-pre_requisite_id")
                            .from(
                                CourseToPrerequisites::Table,
                                CourseToPrerequisites::PreRequisiteId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_faculties junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(CourseFaculties::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CourseFaculties::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseFaculties::FacultyId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(CourseFaculties::CourseId)
                            .col(CourseFaculties::FacultyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_faculties-course_id")
                            .from(CourseFaculties::Table, CourseFaculties::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_faculties-faculty_id")
                            .from(CourseFaculties::Table, CourseFaculties::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to respect foreign key constraints
        manager
            .drop_table(Table::drop().table(CourseFaculties::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseToPrerequisites::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Title,
    Code,
    Credits,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Faculties {
    Table,
    Id,
    FacultyId,
    FirstName,
    MiddleName,
    LastName,
    Email,
    ContactNo,
    Designation,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseToPrerequisites {
    Table,
    CourseId,
    PreRequisiteId,
}

#[derive(DeriveIden)]
enum CourseFaculties {
    Table,
    CourseId,
    FacultyId,
}
