use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Curriculums::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Curriculums::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Curriculums::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Curriculums::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Curriculums::Description).text().null())
                    .col(
                        ColumnDef::new(Curriculums::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_curriculums_course_id")
                            .from(Curriculums::Table, Curriculums::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_curriculums_course_id
                ON curriculums (course_id, created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_curriculums_course_id")
            .await?;

        manager
            .drop_table(Table::drop().table(Curriculums::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Curriculums {
    Table,
    Id,
    CourseId,
    Title,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}
