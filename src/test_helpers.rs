//! Model fixtures for the MockDatabase-backed unit tests.

use chrono::{FixedOffset, TimeZone};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use crate::db::entities::{
    department, membership, refresh_token, role, user, user_department, user_membership,
    user_role,
};

pub fn ts() -> DateTimeWithTimeZone {
    FixedOffset::east_opt(0)
        .expect("offset should be valid")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

/// An activated account with a placeholder password hash.
pub fn user_model(id: Uuid, email: &str) -> user::Model {
    user::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        first_name: "Test".to_string(),
        last_name: "Person".to_string(),
        is_active: true,
        activation_token: None,
        last_login_at: None,
    }
}

pub fn refresh_token_model(token: &str, user_id: Uuid, revoked: bool) -> refresh_token::Model {
    refresh_token::Model {
        id: Uuid::new_v4(),
        created_at: ts(),
        updated_at: ts(),
        token: token.to_string(),
        user_id,
        expires_at: ts(),
        revoked,
    }
}

pub fn role_model(id: Uuid, name: &str) -> role::Model {
    role::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        name: name.to_string(),
        description: None,
    }
}

pub fn department_model(id: Uuid, name: &str) -> department::Model {
    department::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        name: name.to_string(),
        description: None,
    }
}

pub fn membership_model(id: Uuid, name: &str) -> membership::Model {
    membership::Model {
        id,
        created_at: ts(),
        updated_at: ts(),
        name: name.to_string(),
        description: Some(format!("{name} plan")),
        rules: Some(serde_json::json!({ "max_projects": 10 })),
    }
}

pub fn user_role_model(user_id: Uuid, role_id: Uuid, is_enabled: bool) -> user_role::Model {
    user_role::Model {
        id: Uuid::new_v4(),
        created_at: ts(),
        updated_at: ts(),
        user_id,
        role_id,
        is_enabled,
    }
}

pub fn user_department_model(
    user_id: Uuid,
    department_id: Uuid,
    is_enabled: bool,
) -> user_department::Model {
    user_department::Model {
        id: Uuid::new_v4(),
        created_at: ts(),
        updated_at: ts(),
        user_id,
        department_id,
        is_enabled,
    }
}

pub fn user_membership_model(user_id: Uuid, membership_id: Option<Uuid>) -> user_membership::Model {
    user_membership::Model {
        id: Uuid::new_v4(),
        created_at: ts(),
        updated_at: ts(),
        user_id,
        membership_id,
    }
}
