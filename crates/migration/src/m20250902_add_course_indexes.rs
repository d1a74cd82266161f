use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Default listing order
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_created_at")
                    .table(Courses::Table)
                    .col(Courses::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_code")
                    .table(Courses::Table)
                    .col(Courses::Code)
                    .to_owned(),
            )
            .await?;

        // Reverse lookups: the primary keys already cover course_id first
        manager
            .create_index(
                Index::create()
                    .name("idx_course_to_prerequisites_pre_requisite_id")
                    .table(CourseToPrerequisites::Table)
                    .col(CourseToPrerequisites::PreRequisiteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_faculties_faculty_id")
                    .table(CourseFaculties::Table)
                    .col(CourseFaculties::FacultyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_faculties_faculty_id")
                    .table(CourseFaculties::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_course_to_prerequisites_pre_requisite_id")
                    .table(CourseToPrerequisites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_code")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_created_at")
                    .table(Courses::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Code,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CourseToPrerequisites {
    Table,
    PreRequisiteId,
}

#[derive(DeriveIden)]
enum CourseFaculties {
    Table,
    FacultyId,
}
