pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod lookup_dao;
pub mod refresh_token_dao;
pub mod user_dao;
pub mod user_department_dao;
pub mod user_membership_dao;
pub mod user_role_dao;

pub use base::{DaoBase, PaginatedResponse};
pub use base_traits::{HasCreatedAtColumn, HasIdActiveModel, NamedEntity, TimestampedActiveModel};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use lookup_dao::{DepartmentDao, MembershipDao, RoleDao};
pub use refresh_token_dao::RefreshTokenDao;
pub use user_dao::{NewUser, ProfileChanges, UserDao};
pub use user_department_dao::UserDepartmentDao;
pub use user_membership_dao::UserMembershipDao;
pub use user_role_dao::UserRoleDao;
