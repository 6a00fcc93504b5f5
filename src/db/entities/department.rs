use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(name = "Department")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(has_many)]
    pub users: HasMany<super::user_department::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
