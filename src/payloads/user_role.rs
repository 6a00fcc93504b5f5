use sea_orm::entity::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{field_rules, finish, missing_pk};
use crate::{
    db::{
        dao::{DaoBase, RoleDao},
        entities::user_role,
    },
    error::AppError,
};

/// Role association without its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRoleRead {
    pub id: Uuid,
    pub role: Uuid,
    pub is_enabled: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<user_role::Model> for UserRoleRead {
    fn from(model: user_role::Model) -> Self {
        Self {
            id: model.id,
            role: model.role_id,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Only the role is accepted; the owner is always the caller.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserRoleCreateRequest {
    #[validate(required(message = "This field is required."))]
    pub role: Option<Uuid>,
}

impl UserRoleCreateRequest {
    pub async fn validate_with(&self, roles: &RoleDao) -> Result<Uuid, AppError> {
        finish(field_rules(self))?;
        let role_id = self.role.unwrap_or_default();
        if !roles.exists(role_id).await? {
            return Err(AppError::validation("role", missing_pk(&role_id)));
        }
        Ok(role_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRoleUpdateRequest {
    pub is_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::UserRoleCreateRequest;
    use crate::{
        db::{
            dao::{DaoBase, RoleDao},
            entities::role,
        },
        error::AppError,
        test_helpers::role_model,
    };

    #[tokio::test]
    async fn accepts_existing_role() {
        let role_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[role_model(role_id, "editor")]])
            .into_connection();

        let validated = UserRoleCreateRequest { role: Some(role_id) }
            .validate_with(&RoleDao::new(&db))
            .await
            .expect("validation should pass");
        assert_eq!(validated, role_id);
    }

    #[tokio::test]
    async fn rejects_unknown_role_with_pk_message() {
        let role_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<role::Model>::new()])
            .into_connection();

        let err = UserRoleCreateRequest { role: Some(role_id) }
            .validate_with(&RoleDao::new(&db))
            .await
            .expect_err("validation should fail");
        let AppError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(
            errors.get("role"),
            Some(&[format!("Invalid pk \"{role_id}\" - object does not exist.")][..])
        );
    }

    #[tokio::test]
    async fn requires_role() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let err = UserRoleCreateRequest::default()
            .validate_with(&RoleDao::new(&db))
            .await
            .expect_err("validation should fail");
        assert!(matches!(err, AppError::Validation(errors) if errors.has("role")));
    }
}
