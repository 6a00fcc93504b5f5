use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(name = "User department")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "user_departments")]
pub struct Model {
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    #[sea_orm(indexed)]
    pub department_id: Uuid,
    #[sea_orm(default_value = true)]
    pub is_enabled: bool,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "department_id", to = "id", on_delete = "Cascade")]
    pub department: HasOne<super::department::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
