pub mod auth_service;
pub mod context;
pub mod user_department_service;
pub mod user_membership_service;
pub mod user_role_service;
pub mod user_service;

pub use context::ServiceContext;
