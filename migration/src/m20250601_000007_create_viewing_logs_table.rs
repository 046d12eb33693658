use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ViewingLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ViewingLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ViewingLogs::UserId).uuid().not_null())
                    .col(ColumnDef::new(ViewingLogs::VideoId).uuid().not_null())
                    .col(
                        ColumnDef::new(ViewingLogs::WatchedSeconds)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ViewingLogs::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ViewingLogs::LastWatchedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_viewing_logs_user_id")
                            .from(ViewingLogs::Table, ViewingLogs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_viewing_logs_video_id")
                            .from(ViewingLogs::Table, ViewingLogs::VideoId)
                            .to(Videos::Table, Videos::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (user, video); the upsert conflicts on this index
        manager
            .create_index(
                Index::create()
                    .name("uq_viewing_logs_user_video")
                    .table(ViewingLogs::Table)
                    .col(ViewingLogs::UserId)
                    .col(ViewingLogs::VideoId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_viewing_logs_video_id
                ON viewing_logs (video_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_viewing_logs_video_id;
                DROP INDEX IF EXISTS uq_viewing_logs_user_video;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ViewingLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ViewingLogs {
    Table,
    Id,
    UserId,
    VideoId,
    WatchedSeconds,
    IsCompleted,
    LastWatchedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    Id,
}
