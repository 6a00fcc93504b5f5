use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(name = "Role")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(has_many)]
    pub users: HasMany<super::user_role::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
