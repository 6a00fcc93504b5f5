use uuid::Uuid;

use crate::{
    db::{
        dao::{DepartmentDao, UserDepartmentDao},
        entities::user_department,
    },
    error::AppError,
    payloads::user_department::{UserDepartmentCreateRequest, UserDepartmentUpdateRequest},
};

#[derive(Clone)]
pub struct UserDepartmentService {
    user_department_dao: UserDepartmentDao,
    department_dao: DepartmentDao,
}

impl UserDepartmentService {
    pub fn new(user_department_dao: UserDepartmentDao, department_dao: DepartmentDao) -> Self {
        Self {
            user_department_dao,
            department_dao,
        }
    }

    pub async fn list_for_user(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<user_department::Model>, AppError> {
        Ok(self.user_department_dao.list_for_user(user_id).await?)
    }

    pub async fn create(
        &self,
        user_id: &Uuid,
        request: UserDepartmentCreateRequest,
    ) -> Result<user_department::Model, AppError> {
        let department_id = request.validate_with(&self.department_dao).await?;
        let created = self
            .user_department_dao
            .create_for_user(user_id, &department_id)
            .await?;
        tracing::info!(%user_id, %department_id, "department association created");
        Ok(created)
    }

    /// Only the owner's associations are visible; others read as not found.
    pub async fn update(
        &self,
        user_id: &Uuid,
        id: &Uuid,
        request: UserDepartmentUpdateRequest,
    ) -> Result<user_department::Model, AppError> {
        let current = self
            .user_department_dao
            .find_for_user(user_id, id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("User department not found (id={id})"))
            })?;

        match request.is_enabled {
            Some(is_enabled) => Ok(self
                .user_department_dao
                .set_enabled(&current.id, is_enabled)
                .await?),
            None => Ok(current),
        }
    }
}
