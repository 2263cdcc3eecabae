use entity::exams::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(exams::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(exams::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(exams::Column::Name).string_len(100).not_null())
                    .col(ColumnDef::new(exams::Column::Subject).string_len(32).not_null())
                    .col(ColumnDef::new(exams::Column::Date).date().not_null())
                    .col(ColumnDef::new(exams::Column::Semester).small_integer().not_null())
                    .col(ColumnDef::new(exams::Column::Month).small_integer().not_null())
                    .col(ColumnDef::new(exams::Column::Year).integer().not_null())
                    .col(
                        ColumnDef::new(exams::Column::AttendanceThreshold)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(exams::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_EXAMS).col(exams::Column::Id))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(exams::Entity).to_owned())
            .await
    }
}
