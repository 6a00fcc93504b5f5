//! DAOs for the catalogue tables users get associated with. The catalogues
//! are read-only here; association payloads only check that a row exists.

use sea_orm::DatabaseConnection;

use super::DaoBase;
use crate::db::entities::prelude::{Department, Membership, Role};

#[derive(Clone)]
pub struct RoleDao {
    db: DatabaseConnection,
}

impl DaoBase for RoleDao {
    type Entity = Role;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[derive(Clone)]
pub struct DepartmentDao {
    db: DatabaseConnection,
}

impl DaoBase for DepartmentDao {
    type Entity = Department;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[derive(Clone)]
pub struct MembershipDao {
    db: DatabaseConnection,
}

impl DaoBase for MembershipDao {
    type Entity = Membership;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    use super::{MembershipDao, RoleDao};
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::{membership, role};
    use crate::test_helpers::{membership_model, role_model};

    #[tokio::test]
    async fn exists_is_true_for_known_role() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[role_model(id, "editor")]])
            .into_connection();

        let exists = RoleDao::new(&db).exists(id).await.expect("query should succeed");
        assert!(exists);
    }

    #[tokio::test]
    async fn exists_is_false_for_unknown_role() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<role::Model>::new()])
            .into_connection();

        let exists = RoleDao::new(&db)
            .exists(Uuid::new_v4())
            .await
            .expect("query should succeed");
        assert!(!exists);
    }

    #[tokio::test]
    async fn exists_propagates_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("boom".to_string())])
            .into_connection();

        let err = RoleDao::new(&db)
            .exists(Uuid::new_v4())
            .await
            .expect_err("query should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }

    #[tokio::test]
    async fn find_optional_maps_missing_membership_to_none() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<membership::Model>::new()])
            .append_query_results([[membership_model(id, "gold")]])
            .into_connection();
        let dao = MembershipDao::new(&db);

        let missing = dao.find_optional(id).await.expect("query should succeed");
        assert!(missing.is_none());

        let present = dao.find_optional(id).await.expect("query should succeed");
        assert_eq!(present.map(|m| m.name), Some("gold".to_string()));
    }
}
