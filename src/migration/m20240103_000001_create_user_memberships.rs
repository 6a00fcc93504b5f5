use sea_orm_migration::prelude::*;

use super::{
    base_columns, m20240101_000001_create_users::Users,
    m20240102_000001_create_catalogues::Memberships,
};

pub(super) const MEMBERSHIP_FK: &str = "fk-user_memberships-membership_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table.table(UserMemberships::Table).if_not_exists();
        base_columns(
            &mut table,
            UserMemberships::Id,
            UserMemberships::CreatedAt,
            UserMemberships::UpdatedAt,
        );
        table
            .col(ColumnDef::new(UserMemberships::UserId).uuid().not_null())
            .col(ColumnDef::new(UserMemberships::MembershipId).uuid().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk-user_memberships-user_id")
                    .from(UserMemberships::Table, UserMemberships::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name(MEMBERSHIP_FK)
                    .from(UserMemberships::Table, UserMemberships::MembershipId)
                    .to(Memberships::Table, Memberships::Id),
            );

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserMemberships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone)]
pub(super) enum UserMemberships {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    UserId,
    MembershipId,
}
