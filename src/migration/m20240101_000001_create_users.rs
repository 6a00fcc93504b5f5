use sea_orm_migration::prelude::*;

use super::base_columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table.table(Users::Table).if_not_exists();
        base_columns(&mut table, Users::Id, Users::CreatedAt, Users::UpdatedAt);
        table
            .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
            .col(ColumnDef::new(Users::PasswordHash).string().not_null())
            .col(ColumnDef::new(Users::FirstName).string().not_null())
            .col(ColumnDef::new(Users::LastName).string().not_null())
            .col(
                ColumnDef::new(Users::IsActive)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ColumnDef::new(Users::ActivationToken).uuid().null().unique_key())
            .col(ColumnDef::new(Users::LastLoginAt).timestamp_with_time_zone().null());

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone)]
pub(super) enum Users {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    IsActive,
    ActivationToken,
    LastLoginAt,
}
