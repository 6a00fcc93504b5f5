//! Makes `user_memberships.membership_id` optional and cascades deletes of
//! the referenced membership.

use sea_orm_migration::prelude::*;

use super::{
    m20240102_000001_create_catalogues::Memberships,
    m20240103_000001_create_user_memberships::{MEMBERSHIP_FK, UserMemberships},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_foreign_key(drop_membership_fk()).await?;
        manager.alter_table(membership_column(true)).await?;
        manager
            .create_foreign_key(membership_fk(ForeignKeyAction::Cascade))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_foreign_key(drop_membership_fk()).await?;

        // Rows without a membership cannot survive the NOT NULL constraint.
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(UserMemberships::Table)
                    .and_where(Expr::col(UserMemberships::MembershipId).is_null())
                    .to_owned(),
            )
            .await?;

        manager.alter_table(membership_column(false)).await?;
        manager
            .create_foreign_key(membership_fk(ForeignKeyAction::NoAction))
            .await
    }
}

fn membership_column(nullable: bool) -> TableAlterStatement {
    let mut column = ColumnDef::new(UserMemberships::MembershipId);
    column.uuid();
    if nullable {
        column.null();
    } else {
        column.not_null();
    }
    Table::alter()
        .table(UserMemberships::Table)
        .modify_column(column)
        .to_owned()
}

fn drop_membership_fk() -> ForeignKeyDropStatement {
    ForeignKey::drop()
        .name(MEMBERSHIP_FK)
        .table(UserMemberships::Table)
        .to_owned()
}

fn membership_fk(on_delete: ForeignKeyAction) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(MEMBERSHIP_FK)
        .from(UserMemberships::Table, UserMemberships::MembershipId)
        .to(Memberships::Table, Memberships::Id)
        .on_delete(on_delete)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::PostgresQueryBuilder;
    use sea_orm_migration::prelude::*;

    use super::{drop_membership_fk, membership_column, membership_fk};

    #[test]
    fn up_drops_not_null_on_membership_id() {
        let sql = membership_column(true).to_string(PostgresQueryBuilder);

        assert!(sql.starts_with(r#"ALTER TABLE "user_memberships""#), "{sql}");
        assert!(sql.contains(r#""membership_id" DROP NOT NULL"#), "{sql}");
    }

    #[test]
    fn up_recreates_foreign_key_with_cascade() {
        let sql = membership_fk(ForeignKeyAction::Cascade).to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#"ADD CONSTRAINT "fk-user_memberships-membership_id""#), "{sql}");
        assert!(sql.contains(r#"REFERENCES "memberships" ("id")"#), "{sql}");
        assert!(sql.contains("ON DELETE CASCADE"), "{sql}");
    }

    #[test]
    fn down_restores_not_null_without_cascade() {
        let column = membership_column(false).to_string(PostgresQueryBuilder);
        let fk = membership_fk(ForeignKeyAction::NoAction).to_string(PostgresQueryBuilder);

        assert!(column.contains(r#""membership_id" SET NOT NULL"#), "{column}");
        assert!(!fk.contains("CASCADE"), "{fk}");
    }

    #[test]
    fn both_directions_drop_the_same_constraint() {
        let sql = drop_membership_fk().to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#"DROP CONSTRAINT "fk-user_memberships-membership_id""#), "{sql}");
    }
}
