use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::UserMembership, user_membership};

#[derive(Clone)]
pub struct UserMembershipDao {
    db: DatabaseConnection,
}

impl DaoBase for UserMembershipDao {
    type Entity = UserMembership;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserMembershipDao {
    /// Returns the user's only membership row. Both "no row" and "more than
    /// one row" come back as `None`.
    pub async fn find_unique_for_user(
        &self,
        user_id: &Uuid,
    ) -> DaoResult<Option<user_membership::Model>> {
        let user_id = *user_id;
        let response = self
            .find(
                1,
                1,
                Some((user_membership::Column::CreatedAt, Order::Asc)),
                move |query| query.filter(user_membership::Column::UserId.eq(user_id)),
            )
            .await?;

        if response.has_next {
            tracing::warn!(%user_id, "user has more than one membership row");
            return Ok(None);
        }
        Ok(response.data.into_iter().next())
    }
}
