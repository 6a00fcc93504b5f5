use uuid::Uuid;

use crate::{
    db::{
        dao::{RoleDao, UserRoleDao},
        entities::user_role,
    },
    error::AppError,
    payloads::user_role::{UserRoleCreateRequest, UserRoleUpdateRequest},
};

#[derive(Clone)]
pub struct UserRoleService {
    user_role_dao: UserRoleDao,
    role_dao: RoleDao,
}

impl UserRoleService {
    pub fn new(user_role_dao: UserRoleDao, role_dao: RoleDao) -> Self {
        Self {
            user_role_dao,
            role_dao,
        }
    }

    pub async fn list_for_user(&self, user_id: &Uuid) -> Result<Vec<user_role::Model>, AppError> {
        Ok(self.user_role_dao.list_for_user(user_id).await?)
    }

    pub async fn create(
        &self,
        user_id: &Uuid,
        request: UserRoleCreateRequest,
    ) -> Result<user_role::Model, AppError> {
        let role_id = request.validate_with(&self.role_dao).await?;
        let created = self.user_role_dao.create_for_user(user_id, &role_id).await?;
        tracing::info!(%user_id, %role_id, "role association created");
        Ok(created)
    }

    /// Only the owner's associations are visible; others read as not found.
    pub async fn update(
        &self,
        user_id: &Uuid,
        id: &Uuid,
        request: UserRoleUpdateRequest,
    ) -> Result<user_role::Model, AppError> {
        let current = self
            .user_role_dao
            .find_for_user(user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User role not found (id={id})")))?;

        match request.is_enabled {
            Some(is_enabled) => Ok(self.user_role_dao.set_enabled(&current.id, is_enabled).await?),
            None => Ok(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::UserRoleService;
    use crate::{
        db::{
            dao::{DaoBase, RoleDao, UserRoleDao},
            entities::user_role,
        },
        error::AppError,
        payloads::user_role::{UserRoleCreateRequest, UserRoleUpdateRequest},
        test_helpers::{role_model, user_role_model},
    };

    fn service(db: &sea_orm::DatabaseConnection) -> UserRoleService {
        UserRoleService::new(UserRoleDao::new(db), RoleDao::new(db))
    }

    #[tokio::test]
    async fn create_stamps_caller_as_owner() {
        let user_id = Uuid::new_v4();
        let role_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[role_model(role_id, "editor")]])
            .append_query_results([[user_role_model(user_id, role_id, true)]])
            .into_connection();

        let created = service(&db)
            .create(&user_id, UserRoleCreateRequest { role: Some(role_id) })
            .await
            .expect("create should succeed");
        assert_eq!(created.user_id, user_id);
        assert_eq!(created.role_id, role_id);
        assert!(created.is_enabled);
    }

    #[tokio::test]
    async fn update_of_foreign_association_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user_role::Model>::new()])
            .into_connection();

        let err = service(&db)
            .update(
                &Uuid::new_v4(),
                &Uuid::new_v4(),
                UserRoleUpdateRequest {
                    is_enabled: Some(false),
                },
            )
            .await
            .expect_err("update should fail");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_writes_enabled_flag() {
        let user_id = Uuid::new_v4();
        let current = user_role_model(user_id, Uuid::new_v4(), true);
        let mut disabled = current.clone();
        disabled.is_enabled = false;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[current.clone()]])
            .append_query_results([[current.clone()]])
            .append_query_results([[disabled]])
            .into_connection();

        let updated = service(&db)
            .update(
                &user_id,
                &current.id,
                UserRoleUpdateRequest {
                    is_enabled: Some(false),
                },
            )
            .await
            .expect("update should succeed");
        assert!(!updated.is_enabled);
        assert_eq!(updated.role_id, current.role_id);
    }

    #[tokio::test]
    async fn update_without_flag_keeps_current_row() {
        let user_id = Uuid::new_v4();
        let current = user_role_model(user_id, Uuid::new_v4(), true);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[current.clone()]])
            .into_connection();

        let updated = service(&db)
            .update(&user_id, &current.id, UserRoleUpdateRequest::default())
            .await
            .expect("update should succeed");
        assert_eq!(updated, current);
    }
}
