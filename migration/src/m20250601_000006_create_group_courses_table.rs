use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create group_courses join table (the permission grant)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(GroupCourses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GroupCourses::GroupId).uuid().not_null())
                    .col(ColumnDef::new(GroupCourses::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(GroupCourses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(GroupCourses::GroupId)
                            .col(GroupCourses::CourseId),
                    )
                    // FK → groups
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_courses_group_id")
                            .from(GroupCourses::Table, GroupCourses::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → courses
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_courses_course_id")
                            .from(GroupCourses::Table, GroupCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all groups granted a course
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_group_courses_course_id
                ON group_courses (course_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_group_courses_course_id")
            .await?;

        manager
            .drop_table(Table::drop().table(GroupCourses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GroupCourses {
    Table,
    GroupId,
    CourseId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Groups {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}
