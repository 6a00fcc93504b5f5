use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::UserRole, user_role};

#[derive(Clone)]
pub struct UserRoleDao {
    db: DatabaseConnection,
}

impl DaoBase for UserRoleDao {
    type Entity = UserRole;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserRoleDao {
    pub async fn list_for_user(&self, user_id: &Uuid) -> DaoResult<Vec<user_role::Model>> {
        let user_id = *user_id;
        self.find_all(
            Some((user_role::Column::CreatedAt, Order::Asc)),
            move |query| query.filter(user_role::Column::UserId.eq(user_id)),
        )
        .await
    }

    pub async fn find_for_user(
        &self,
        user_id: &Uuid,
        id: &Uuid,
    ) -> DaoResult<Option<user_role::Model>> {
        let (user_id, id) = (*user_id, *id);
        self.find_first(None, move |query| {
            query
                .filter(user_role::Column::Id.eq(id))
                .filter(user_role::Column::UserId.eq(user_id))
        })
        .await
    }

    pub async fn create_for_user(
        &self,
        user_id: &Uuid,
        role_id: &Uuid,
    ) -> DaoResult<user_role::Model> {
        let model = user_role::ActiveModel {
            user_id: Set(*user_id),
            role_id: Set(*role_id),
            is_enabled: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn set_enabled(&self, id: &Uuid, is_enabled: bool) -> DaoResult<user_role::Model> {
        self.update(*id, move |active| {
            active.is_enabled = Set(is_enabled);
        })
        .await
    }
}
