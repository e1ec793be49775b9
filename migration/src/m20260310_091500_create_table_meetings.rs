use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create meetings table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Meetings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Meetings::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Meetings::OrganizerId).uuid().not_null())
                    .col(ColumnDef::new(Meetings::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Meetings::Description).text().not_null())
                    .col(ColumnDef::new(Meetings::Date).date().not_null())
                    .col(ColumnDef::new(Meetings::StartTime).time().not_null())
                    .col(ColumnDef::new(Meetings::EndTime).time().not_null())
                    .col(
                        ColumnDef::new(Meetings::Participants)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Meetings::Status)
                            .string_len(16)
                            .not_null()
                            .default("scheduled"),
                    )
                    .col(
                        ColumnDef::new(Meetings::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Meetings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Meetings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meetings_organizer_id")
                            .from(Meetings::Table, Meetings::OrganizerId)
                            .to(Users::Table, Users::Id)
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
                ALTER TABLE meetings
                ADD CONSTRAINT chk_meetings_time_order CHECK (start_time < end_time);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE meetings
                ADD CONSTRAINT chk_meetings_status
                CHECK (status IN ('scheduled', 'cancelled', 'completed'));
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Listing: active meetings ordered by (date, start_time)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_meetings_active_schedule
                ON meetings (date, start_time)
                WHERE is_deleted = false;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_meetings_organizer_id
                ON meetings (organizer_id);
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
                DROP INDEX IF EXISTS idx_meetings_active_schedule;
                DROP INDEX IF EXISTS idx_meetings_organizer_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Meetings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Meetings {
    Table,
    Id,
    OrganizerId,
    Title,
    Description,
    Date,
    StartTime,
    EndTime,
    Participants,
    Status,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
