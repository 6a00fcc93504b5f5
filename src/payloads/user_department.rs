use sea_orm::entity::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{field_rules, finish, missing_pk};
use crate::{
    db::{
        dao::{DaoBase, DepartmentDao},
        entities::user_department,
    },
    error::AppError,
};

/// Department association without its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDepartmentRead {
    pub id: Uuid,
    pub department: Uuid,
    pub is_enabled: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<user_department::Model> for UserDepartmentRead {
    fn from(model: user_department::Model) -> Self {
        Self {
            id: model.id,
            department: model.department_id,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserDepartmentCreateRequest {
    #[validate(required(message = "This field is required."))]
    pub department: Option<Uuid>,
}

impl UserDepartmentCreateRequest {
    pub async fn validate_with(&self, departments: &DepartmentDao) -> Result<Uuid, AppError> {
        finish(field_rules(self))?;
        let department_id = self.department.unwrap_or_default();
        if !departments.exists(department_id).await? {
            return Err(AppError::validation(
                "department",
                missing_pk(&department_id),
            ));
        }
        Ok(department_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDepartmentUpdateRequest {
    pub is_enabled: Option<bool>,
}
