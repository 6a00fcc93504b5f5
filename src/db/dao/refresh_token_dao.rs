use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, sea_query::Expr};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::{prelude::RefreshToken, refresh_token};

#[derive(Clone)]
pub struct RefreshTokenDao {
    db: DatabaseConnection,
}

impl DaoBase for RefreshTokenDao {
    type Entity = RefreshToken;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl RefreshTokenDao {
    /// Stores a new opaque token for `user_id` that expires after `ttl`.
    pub async fn issue(&self, user_id: &Uuid, ttl: Duration) -> DaoResult<refresh_token::Model> {
        self.create(refresh_token::ActiveModel {
            token: Set(Uuid::new_v4().simple().to_string()),
            user_id: Set(*user_id),
            expires_at: Set(Utc::now().fixed_offset() + ttl),
            revoked: Set(false),
            ..Default::default()
        })
        .await
    }

    /// Revoked and expired rows are returned too; callers decide what they mean.
    pub async fn find_by_token(&self, token: &str) -> DaoResult<Option<refresh_token::Model>> {
        let token = token.to_string();
        self.find_first(None, move |query| {
            query.filter(refresh_token::Column::Token.eq(token))
        })
        .await
    }

    /// Marks the token used. `false` means another request consumed it first.
    pub async fn consume(&self, id: &Uuid) -> DaoResult<bool> {
        let result = RefreshToken::update_many()
            .col_expr(refresh_token::Column::Revoked, Expr::value(true))
            .col_expr(
                refresh_token::Column::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(refresh_token::Column::Id.eq(*id))
            .filter(refresh_token::Column::Revoked.eq(false))
            .exec(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(result.rows_affected == 1)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use super::RefreshTokenDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::refresh_token;
    use crate::test_helpers::refresh_token_model;

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn issue_returns_stored_row() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[refresh_token_model("issued", user_id, false)]])
            .into_connection();

        let token = RefreshTokenDao::new(&db)
            .issue(&user_id, Duration::days(7))
            .await
            .expect("insert should succeed");
        assert_eq!(token.user_id, user_id);
        assert!(!token.revoked);
    }

    #[tokio::test]
    async fn find_by_token_keeps_revoked_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[refresh_token_model("used", Uuid::new_v4(), true)]])
            .into_connection();

        let token = RefreshTokenDao::new(&db)
            .find_by_token("used")
            .await
            .expect("query should succeed")
            .expect("token should exist");
        assert!(token.revoked);
    }

    #[tokio::test]
    async fn find_by_token_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<refresh_token::Model>::new()])
            .into_connection();

        let token = RefreshTokenDao::new(&db)
            .find_by_token("missing")
            .await
            .expect("query should succeed");
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn consume_reports_whether_this_call_won() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let dao = RefreshTokenDao::new(&db);
        let id = Uuid::new_v4();

        assert!(dao.consume(&id).await.expect("first consume"));
        assert!(!dao.consume(&id).await.expect("second consume"));
    }

    #[tokio::test]
    async fn consume_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("update failed".to_string())])
            .into_connection();

        let err = RefreshTokenDao::new(&db)
            .consume(&Uuid::new_v4())
            .await
            .expect_err("update should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }
}
