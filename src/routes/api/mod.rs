pub mod auth;
pub mod health;
pub mod me;
pub mod me_departments;
pub mod me_roles;
mod router;
pub mod users;

pub use router::router;
