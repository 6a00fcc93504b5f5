use uuid::Uuid;

use crate::{
    auth::password::hash_password,
    db::{
        dao::{DaoBase, NewUser, ProfileChanges, UserDao, UserDepartmentDao},
        entities::user,
    },
    error::AppError,
    payloads::{
        activation::ActivationRequest,
        me::MeRead,
        user::{UserCreateRequest, UserUpdateRequest},
    },
    services::user_membership_service::UserMembershipService,
};

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
    user_department_dao: UserDepartmentDao,
    memberships: UserMembershipService,
}

impl UserService {
    pub fn new(
        user_dao: UserDao,
        user_department_dao: UserDepartmentDao,
        memberships: UserMembershipService,
    ) -> Self {
        Self {
            user_dao,
            user_department_dao,
            memberships,
        }
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_optional(*id).await?)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_by_email(email).await?)
    }

    /// Creates an inactive account carrying a fresh activation token.
    pub async fn register(&self, request: UserCreateRequest) -> Result<user::Model, AppError> {
        let account = request.validate_with(&self.user_dao).await?;
        let password_hash = hash_password(&account.password)?;

        let user = self
            .user_dao
            .create_user(NewUser {
                email: account.email,
                password_hash,
                first_name: account.first_name,
                last_name: account.last_name,
                activation_token: Uuid::new_v4(),
            })
            .await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    pub async fn activate(&self, request: ActivationRequest) -> Result<user::Model, AppError> {
        let pending = request.validate_with(&self.user_dao).await?;
        let user = self.user_dao.activate(&pending.id).await?;
        tracing::info!(user_id = %user.id, "user activated");
        Ok(user)
    }

    pub async fn update_profile(
        &self,
        user_id: &Uuid,
        request: UserUpdateRequest,
    ) -> Result<user::Model, AppError> {
        let current = self.user_dao.find_by_id(*user_id).await?;
        let update = request.validate_with(&current, &self.user_dao).await?;

        let password_hash = match update.password.as_deref() {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        let changes = ProfileChanges {
            email: update.email,
            password_hash,
            first_name: update.first_name,
            last_name: update.last_name,
        };
        if changes == ProfileChanges::default() {
            return Ok(current);
        }

        Ok(self.user_dao.update_profile(user_id, changes).await?)
    }

    /// Composite projection of the caller. Missing links read as `null`.
    pub async fn me(&self, user_id: &Uuid) -> Result<MeRead, AppError> {
        let user = self.user_dao.find_by_id(*user_id).await?;
        let membership = self
            .memberships
            .membership_for_user(user_id)
            .await?
            .map(Into::into);
        let department = self
            .user_department_dao
            .first_enabled_for_user(user_id)
            .await?
            .map(|row| row.department_id);

        Ok(MeRead::new(user, membership, department))
    }

    pub async fn set_last_login(
        &self,
        user_id: &Uuid,
        last_login: &chrono::DateTime<chrono::FixedOffset>,
    ) -> Result<(), AppError> {
        Ok(self.user_dao.set_last_login(user_id, last_login).await?)
    }
}
