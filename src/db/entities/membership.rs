use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

/// A plan or tier a user can be attached to.
#[base_entity(name = "Membership")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "memberships")]
pub struct Model {
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub rules: Option<Json>,
    #[sea_orm(has_many)]
    pub users: HasMany<super::user_membership::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
