use sea_orm_migration::prelude::*;

use super::base_columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut roles = Table::create();
        roles.table(Roles::Table).if_not_exists();
        base_columns(&mut roles, Roles::Id, Roles::CreatedAt, Roles::UpdatedAt);
        roles
            .col(ColumnDef::new(Roles::Name).string().not_null().unique_key())
            .col(ColumnDef::new(Roles::Description).text().null());
        manager.create_table(roles.to_owned()).await?;

        let mut departments = Table::create();
        departments.table(Departments::Table).if_not_exists();
        base_columns(
            &mut departments,
            Departments::Id,
            Departments::CreatedAt,
            Departments::UpdatedAt,
        );
        departments
            .col(
                ColumnDef::new(Departments::Name)
                    .string()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Departments::Description).text().null());
        manager.create_table(departments.to_owned()).await?;

        let mut memberships = Table::create();
        memberships.table(Memberships::Table).if_not_exists();
        base_columns(
            &mut memberships,
            Memberships::Id,
            Memberships::CreatedAt,
            Memberships::UpdatedAt,
        );
        memberships
            .col(
                ColumnDef::new(Memberships::Name)
                    .string()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Memberships::Description).text().null())
            .col(ColumnDef::new(Memberships::Rules).json().null());
        manager.create_table(memberships.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Memberships::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone)]
pub(super) enum Roles {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Name,
    Description,
}

#[derive(DeriveIden, Clone)]
pub(super) enum Departments {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Name,
    Description,
}

#[derive(DeriveIden, Clone)]
pub(super) enum Memberships {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Name,
    Description,
    Rules,
}
