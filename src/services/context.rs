use sea_orm::DatabaseConnection;

use crate::{
    auth::jwt::JwtKeys,
    config::AuthConfig,
    db::dao::DaoContext,
    services::{
        auth_service::AuthService, user_department_service::UserDepartmentService,
        user_membership_service::UserMembershipService, user_role_service::UserRoleService,
        user_service::UserService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
    auth: AuthConfig,
    jwt: JwtKeys,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection, auth: &AuthConfig, jwt: JwtKeys) -> Self {
        Self {
            daos: DaoContext::new(db),
            auth: auth.clone(),
            jwt,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db, &state.config.auth, state.jwt.clone())
    }

    pub fn user(&self) -> UserService {
        UserService::new(
            self.daos.user(),
            self.daos.user_department(),
            self.user_membership(),
        )
    }

    pub fn user_role(&self) -> UserRoleService {
        UserRoleService::new(self.daos.user_role(), self.daos.role())
    }

    pub fn user_department(&self) -> UserDepartmentService {
        UserDepartmentService::new(self.daos.user_department(), self.daos.department())
    }

    pub fn user_membership(&self) -> UserMembershipService {
        UserMembershipService::new(self.daos.user_membership(), self.daos.membership())
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(
            self.user(),
            self.daos.refresh_token(),
            self.jwt.clone(),
            &self.auth,
        )
    }
}
