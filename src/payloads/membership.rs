use sea_orm::entity::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::db::entities::{membership, user_membership};

/// Catalogue membership, nested inside the "me" projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MembershipRead {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub rules: Option<Value>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<membership::Model> for MembershipRead {
    fn from(model: membership::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            rules: model.rules,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// A user's membership row without its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserMembershipRead {
    pub id: Uuid,
    pub membership: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<user_membership::Model> for UserMembershipRead {
    fn from(model: user_membership::Model) -> Self {
        Self {
            id: model.id,
            membership: model.membership_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
