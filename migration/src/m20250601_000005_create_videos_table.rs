use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Videos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Videos::CurriculumId).uuid().not_null())
                    .col(ColumnDef::new(Videos::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Videos::Description).text().null())
                    .col(ColumnDef::new(Videos::VideoUrl).text().not_null())
                    .col(
                        ColumnDef::new(Videos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_videos_curriculum_id")
                            .from(Videos::Table, Videos::CurriculumId)
                            .to(Curriculums::Table, Curriculums::Id)
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
                CREATE INDEX idx_videos_curriculum_id
                ON videos (curriculum_id, created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_videos_curriculum_id")
            .await?;

        manager
            .drop_table(Table::drop().table(Videos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    Id,
    CurriculumId,
    Title,
    Description,
    VideoUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Curriculums {
    Table,
    Id,
}
