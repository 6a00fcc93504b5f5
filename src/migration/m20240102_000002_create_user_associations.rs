use sea_orm_migration::prelude::*;

use super::{
    base_columns,
    m20240101_000001_create_users::Users,
    m20240102_000001_create_catalogues::{Departments, Roles},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut user_roles = Table::create();
        user_roles.table(UserRoles::Table).if_not_exists();
        base_columns(
            &mut user_roles,
            UserRoles::Id,
            UserRoles::CreatedAt,
            UserRoles::UpdatedAt,
        );
        user_roles
            .col(ColumnDef::new(UserRoles::UserId).uuid().not_null())
            .col(ColumnDef::new(UserRoles::RoleId).uuid().not_null())
            .col(
                ColumnDef::new(UserRoles::IsEnabled)
                    .boolean()
                    .not_null()
                    .default(true),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk-user_roles-user_id")
                    .from(UserRoles::Table, UserRoles::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk-user_roles-role_id")
                    .from(UserRoles::Table, UserRoles::RoleId)
                    .to(Roles::Table, Roles::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            );
        manager.create_table(user_roles.to_owned()).await?;

        let mut user_departments = Table::create();
        user_departments.table(UserDepartments::Table).if_not_exists();
        base_columns(
            &mut user_departments,
            UserDepartments::Id,
            UserDepartments::CreatedAt,
            UserDepartments::UpdatedAt,
        );
        user_departments
            .col(ColumnDef::new(UserDepartments::UserId).uuid().not_null())
            .col(ColumnDef::new(UserDepartments::DepartmentId).uuid().not_null())
            .col(
                ColumnDef::new(UserDepartments::IsEnabled)
                    .boolean()
                    .not_null()
                    .default(true),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk-user_departments-user_id")
                    .from(UserDepartments::Table, UserDepartments::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk-user_departments-department_id")
                    .from(UserDepartments::Table, UserDepartments::DepartmentId)
                    .to(Departments::Table, Departments::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            );
        manager.create_table(user_departments.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-user_departments-user_id-is_enabled")
                    .table(UserDepartments::Table)
                    .col(UserDepartments::UserId)
                    .col(UserDepartments::IsEnabled)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserDepartments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone)]
enum UserRoles {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    UserId,
    RoleId,
    IsEnabled,
}

#[derive(DeriveIden, Clone)]
enum UserDepartments {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    UserId,
    DepartmentId,
    IsEnabled,
}
