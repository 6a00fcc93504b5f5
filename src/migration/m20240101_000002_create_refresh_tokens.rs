use sea_orm_migration::prelude::*;

use super::{base_columns, m20240101_000001_create_users::Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table.table(RefreshTokens::Table).if_not_exists();
        base_columns(
            &mut table,
            RefreshTokens::Id,
            RefreshTokens::CreatedAt,
            RefreshTokens::UpdatedAt,
        );
        table
            .col(
                ColumnDef::new(RefreshTokens::Token)
                    .string()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(RefreshTokens::UserId).uuid().not_null())
            .col(
                ColumnDef::new(RefreshTokens::ExpiresAt)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .col(
                ColumnDef::new(RefreshTokens::Revoked)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk-refresh_tokens-user_id")
                    .from(RefreshTokens::Table, RefreshTokens::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RefreshTokens::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone)]
enum RefreshTokens {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Token,
    UserId,
    ExpiresAt,
    Revoked,
}
