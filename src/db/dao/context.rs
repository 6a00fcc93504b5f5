use sea_orm::DatabaseConnection;

use super::{
    DaoBase, DepartmentDao, MembershipDao, RefreshTokenDao, RoleDao, UserDao, UserDepartmentDao,
    UserMembershipDao, UserRoleDao,
};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }

    pub fn refresh_token(&self) -> RefreshTokenDao {
        DaoBase::new(&self.db)
    }

    pub fn role(&self) -> RoleDao {
        DaoBase::new(&self.db)
    }

    pub fn department(&self) -> DepartmentDao {
        DaoBase::new(&self.db)
    }

    pub fn membership(&self) -> MembershipDao {
        DaoBase::new(&self.db)
    }

    pub fn user_role(&self) -> UserRoleDao {
        DaoBase::new(&self.db)
    }

    pub fn user_department(&self) -> UserDepartmentDao {
        DaoBase::new(&self.db)
    }

    pub fn user_membership(&self) -> UserMembershipDao {
        DaoBase::new(&self.db)
    }
}
