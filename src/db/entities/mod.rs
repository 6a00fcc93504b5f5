#[allow(unused_imports)]
pub mod prelude {
    pub use super::department::Entity as Department;
    pub use super::membership::Entity as Membership;
    pub use super::refresh_token::Entity as RefreshToken;
    pub use super::role::Entity as Role;
    pub use super::user::Entity as User;
    pub use super::user_department::Entity as UserDepartment;
    pub use super::user_membership::Entity as UserMembership;
    pub use super::user_role::Entity as UserRole;
}

pub mod department;
pub mod membership;
pub mod refresh_token;
pub mod role;
pub mod user;
pub mod user_department;
pub mod user_membership;
pub mod user_role;
