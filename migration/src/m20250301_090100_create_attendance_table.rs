use entity::{
    attendance::{self, constraints::*},
    users,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(attendance::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(attendance::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(attendance::Column::Student).uuid().not_null())
                    .col(ColumnDef::new(attendance::Column::Date).date().not_null())
                    .col(
                        ColumnDef::new(attendance::Column::Subject)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(attendance::Column::Status)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(attendance::Column::MarkedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(attendance::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_ATTENDANCE)
                            .col(attendance::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_ATTENDANCE_STUDENT_DATE_SUBJECT)
                            .col(attendance::Column::Student)
                            .col(attendance::Column::Date)
                            .col(attendance::Column::Subject)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATTENDANCE_STUDENT)
                            .from(attendance::Entity, attendance::Column::Student)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ATTENDANCE_MARKED_BY)
                            .from(attendance::Entity, attendance::Column::MarkedBy)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(attendance::Entity).to_owned())
            .await
    }
}
