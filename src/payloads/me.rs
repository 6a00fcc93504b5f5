use sea_orm::entity::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::membership::MembershipRead;
use crate::db::entities::user;

/// The caller's own account. Secrets are never included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeRead {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub membership: Option<MembershipRead>,
    pub department: Option<Uuid>,
}

impl MeRead {
    pub fn new(
        user: user::Model,
        membership: Option<MembershipRead>,
        department: Option<Uuid>,
    ) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: user.is_active,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
            updated_at: user.updated_at,
            membership,
            department,
        }
    }
}
