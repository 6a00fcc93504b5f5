//! Schema migrations, applied in order at start-up.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_refresh_tokens;
mod m20240102_000001_create_catalogues;
mod m20240102_000002_create_user_associations;
mod m20240103_000001_create_user_memberships;
mod m20240805_000001_alter_user_memberships_membership;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_refresh_tokens::Migration),
            Box::new(m20240102_000001_create_catalogues::Migration),
            Box::new(m20240102_000002_create_user_associations::Migration),
            Box::new(m20240103_000001_create_user_memberships::Migration),
            Box::new(m20240805_000001_alter_user_memberships_membership::Migration),
        ]
    }
}

/// `id`, `created_at` and `updated_at`, shared by every table.
fn base_columns<T: IntoIden + 'static>(
    table: &mut TableCreateStatement,
    id: T,
    created_at: T,
    updated_at: T,
) {
    table
        .col(ColumnDef::new(id).uuid().not_null().primary_key())
        .col(
            ColumnDef::new(created_at)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(updated_at)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        );
}
