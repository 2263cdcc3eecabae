use entity::users::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(users::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(users::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(users::Column::Name).string_len(255).not_null())
                    .col(ColumnDef::new(users::Column::Email).string_len(255).not_null())
                    .col(ColumnDef::new(users::Column::Role).string_len(16).not_null())
                    .col(ColumnDef::new(users::Column::Usn).string_len(32).null())
                    .col(ColumnDef::new(users::Column::Section).string_len(16).null())
                    .col(ColumnDef::new(users::Column::Semester).small_integer().null())
                    .col(ColumnDef::new(users::Column::Subject).string_len(32).null())
                    .col(
                        ColumnDef::new(users::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_USERS).col(users::Column::Id))
                    .index(
                        Index::create()
                            .name(UC_USERS_EMAIL)
                            .col(users::Column::Email)
                            .unique(),
                    )
                    .index(
                        Index::create()
                            .name(UC_USERS_USN)
                            .col(users::Column::Usn)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(users::Entity).to_owned())
            .await
    }
}
