use uuid::Uuid;

use crate::{
    db::{
        dao::{DaoBase, MembershipDao, UserMembershipDao},
        entities::{membership, user_membership},
    },
    error::AppError,
};

#[derive(Clone)]
pub struct UserMembershipService {
    user_membership_dao: UserMembershipDao,
    membership_dao: MembershipDao,
}

impl UserMembershipService {
    pub fn new(user_membership_dao: UserMembershipDao, membership_dao: MembershipDao) -> Self {
        Self {
            user_membership_dao,
            membership_dao,
        }
    }

    /// The user's membership row; `None` when missing or ambiguous.
    pub async fn find_for_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Option<user_membership::Model>, AppError> {
        Ok(self.user_membership_dao.find_unique_for_user(user_id).await?)
    }

    /// The catalogue membership the user is attached to, if any.
    pub async fn membership_for_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Option<membership::Model>, AppError> {
        let Some(row) = self.find_for_user(user_id).await? else {
            return Ok(None);
        };
        let Some(membership_id) = row.membership_id else {
            return Ok(None);
        };
        Ok(self.membership_dao.find_optional(membership_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    use super::UserMembershipService;
    use crate::{
        db::dao::{DaoBase, MembershipDao, UserMembershipDao},
        db::entities::{membership, user_membership},
        error::AppError,
        test_helpers::{membership_model, user_membership_model},
    };

    fn service(db: &sea_orm::DatabaseConnection) -> UserMembershipService {
        UserMembershipService::new(UserMembershipDao::new(db), MembershipDao::new(db))
    }

    #[tokio::test]
    async fn resolves_linked_membership() {
        let user_id = Uuid::new_v4();
        let membership_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_membership_model(user_id, Some(membership_id))]])
            .append_query_results([[membership_model(membership_id, "gold")]])
            .into_connection();

        let membership = service(&db)
            .membership_for_user(&user_id)
            .await
            .expect("lookup should succeed")
            .expect("membership should exist");
        assert_eq!(membership.id, membership_id);
    }

    #[tokio::test]
    async fn null_membership_reference_yields_none() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_membership_model(user_id, None)]])
            .into_connection();

        let membership = service(&db)
            .membership_for_user(&user_id)
            .await
            .expect("lookup should succeed");
        assert!(membership.is_none());
    }

    #[tokio::test]
    async fn missing_catalogue_row_yields_none() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_membership_model(user_id, Some(Uuid::new_v4()))]])
            .append_query_results([Vec::<membership::Model>::new()])
            .into_connection();

        let membership = service(&db)
            .membership_for_user(&user_id)
            .await
            .expect("lookup should succeed");
        assert!(membership.is_none());
    }

    #[tokio::test]
    async fn database_failures_still_propagate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("boom".to_string())])
            .into_connection();

        let err = service(&db)
            .membership_for_user(&Uuid::new_v4())
            .await
            .expect_err("lookup should fail");
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn find_for_user_without_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user_membership::Model>::new()])
            .into_connection();

        let row = service(&db)
            .find_for_user(&Uuid::new_v4())
            .await
            .expect("lookup should succeed");
        assert!(row.is_none());
    }
}
