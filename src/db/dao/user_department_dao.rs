use sea_orm::{ColumnTrait, DatabaseConnection, Order, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::UserDepartment, user_department};

#[derive(Clone)]
pub struct UserDepartmentDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDepartmentDao {
    type Entity = UserDepartment;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDepartmentDao {
    pub async fn list_for_user(&self, user_id: &Uuid) -> DaoResult<Vec<user_department::Model>> {
        let user_id = *user_id;
        self.find_all(
            Some((user_department::Column::CreatedAt, Order::Asc)),
            move |query| query.filter(user_department::Column::UserId.eq(user_id)),
        )
        .await
    }

    pub async fn find_for_user(
        &self,
        user_id: &Uuid,
        id: &Uuid,
    ) -> DaoResult<Option<user_department::Model>> {
        let (user_id, id) = (*user_id, *id);
        self.find_first(None, move |query| {
            query
                .filter(user_department::Column::Id.eq(id))
                .filter(user_department::Column::UserId.eq(user_id))
        })
        .await
    }

    pub async fn create_for_user(
        &self,
        user_id: &Uuid,
        department_id: &Uuid,
    ) -> DaoResult<user_department::Model> {
        let model = user_department::ActiveModel {
            user_id: Set(*user_id),
            department_id: Set(*department_id),
            is_enabled: Set(true),
            ..Default::default()
        };
        self.create(model).await
    }

    /// Oldest enabled association; nothing stops a user from having several.
    pub async fn first_enabled_for_user(
        &self,
        user_id: &Uuid,
    ) -> DaoResult<Option<user_department::Model>> {
        let user_id = *user_id;
        self.find_first(
            Some((user_department::Column::CreatedAt, Order::Asc)),
            move |query| {
                query
                    .filter(user_department::Column::UserId.eq(user_id))
                    .filter(user_department::Column::IsEnabled.eq(true))
            },
        )
        .await
    }

    pub async fn set_enabled(&self, id: &Uuid, is_enabled: bool) -> DaoResult<user_department::Model> {
        self.update(*id, move |active| {
            active.is_enabled = Set(is_enabled);
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::UserDepartmentDao;
    use crate::db::dao::DaoBase;
    use crate::db::entities::user_department;
    use crate::test_helpers::user_department_model;

    #[tokio::test]
    async fn first_enabled_for_user_returns_none_without_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user_department::Model>::new()])
            .into_connection();
        let dao = UserDepartmentDao::new(&db);

        let result = dao
            .first_enabled_for_user(&Uuid::new_v4())
            .await
            .expect("query should succeed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn first_enabled_for_user_returns_first_row() {
        let user_id = Uuid::new_v4();
        let first = user_department_model(user_id, Uuid::new_v4(), true);
        let second = user_department_model(user_id, Uuid::new_v4(), true);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[first.clone(), second]])
            .into_connection();
        let dao = UserDepartmentDao::new(&db);

        let result = dao
            .first_enabled_for_user(&user_id)
            .await
            .expect("query should succeed");
        assert_eq!(result.map(|d| d.department_id), Some(first.department_id));
    }

    #[tokio::test]
    async fn list_for_user_collects_a_single_page() {
        let user_id = Uuid::new_v4();
        let rows = vec![
            user_department_model(user_id, Uuid::new_v4(), true),
            user_department_model(user_id, Uuid::new_v4(), false),
        ];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows])
            .into_connection();
        let dao = UserDepartmentDao::new(&db);

        let result = dao.list_for_user(&user_id).await.expect("query should succeed");
        assert_eq!(result.len(), 2);
        assert!(result[0].is_enabled);
        assert!(!result[1].is_enabled);
    }
}
