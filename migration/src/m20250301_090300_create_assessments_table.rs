use entity::{
    assessments::{self, constraints::*},
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
                    .table(assessments::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(assessments::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(assessments::Column::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(assessments::Column::Date).date().not_null())
                    .col(
                        ColumnDef::new(assessments::Column::AttendanceThreshold)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(assessments::Column::StartDate).date().not_null())
                    .col(ColumnDef::new(assessments::Column::EndDate).date().not_null())
                    .col(ColumnDef::new(assessments::Column::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(assessments::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_ASSESSMENTS)
                            .col(assessments::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ASSESSMENTS_CREATED_BY)
                            .from(assessments::Entity, assessments::Column::CreatedBy)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(assessments::Entity).to_owned())
            .await
    }
}
