use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity(name = "User membership")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "user_memberships")]
pub struct Model {
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    // Nullable since the alter_user_memberships_membership migration.
    #[sea_orm(indexed)]
    pub membership_id: Option<Uuid>,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "membership_id", to = "id", on_delete = "Cascade")]
    pub membership: HasOne<super::membership::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
