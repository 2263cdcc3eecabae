use entity::{
    eligibility::{self, constraints::*},
    exams, users,
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
                    .table(eligibility::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(eligibility::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(eligibility::Column::Student).uuid().not_null())
                    .col(ColumnDef::new(eligibility::Column::Exam).uuid().not_null())
                    .col(
                        ColumnDef::new(eligibility::Column::Subject)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(eligibility::Column::IsEligible)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(eligibility::Column::AttendancePercentage)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(eligibility::Column::TotalClasses)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(eligibility::Column::AttendedClasses)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(eligibility::Column::CalculatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_ELIGIBILITY)
                            .col(eligibility::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_ELIGIBILITY_STUDENT_EXAM_SUBJECT)
                            .col(eligibility::Column::Student)
                            .col(eligibility::Column::Exam)
                            .col(eligibility::Column::Subject)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ELIGIBILITY_STUDENT)
                            .from(eligibility::Entity, eligibility::Column::Student)
                            .to(users::Entity, users::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ELIGIBILITY_EXAM)
                            .from(eligibility::Entity, eligibility::Column::Exam)
                            .to(exams::Entity, exams::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(eligibility::Entity).to_owned())
            .await
    }
}
