use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(name = "User")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(default_value = false)]
    pub is_active: bool,
    #[sea_orm(unique)]
    pub activation_token: Option<Uuid>,
    pub last_login_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(has_many)]
    pub refresh_tokens: HasMany<super::refresh_token::Entity>,
    #[sea_orm(has_many)]
    pub roles: HasMany<super::user_role::Entity>,
    #[sea_orm(has_many)]
    pub departments: HasMany<super::user_department::Entity>,
    #[sea_orm(has_many)]
    pub memberships: HasMany<super::user_membership::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
