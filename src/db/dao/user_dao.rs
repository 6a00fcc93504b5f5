use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::User, user};

/// Columns written when a new account is registered.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub activation_token: Uuid,
}

/// Partial profile update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        let email = email.to_string();
        self.find_first(None, move |query| query.filter(user::Column::Email.eq(email)))
            .await
    }

    pub async fn find_inactive_by_activation_token(
        &self,
        token: &Uuid,
    ) -> DaoResult<Option<user::Model>> {
        let token = *token;
        self.find_first(None, move |query| {
            query
                .filter(user::Column::ActivationToken.eq(token))
                .filter(user::Column::IsActive.eq(false))
        })
        .await
    }

    pub async fn create_user(&self, new_user: NewUser) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            first_name: Set(new_user.first_name),
            last_name: Set(new_user.last_name),
            is_active: Set(false),
            activation_token: Set(Some(new_user.activation_token)),
            last_login_at: Set(None),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn activate(&self, id: &Uuid) -> DaoResult<user::Model> {
        self.update(*id, |active| {
            active.is_active = Set(true);
            active.activation_token = Set(None);
        })
        .await
    }

    pub async fn update_profile(
        &self,
        id: &Uuid,
        changes: ProfileChanges,
    ) -> DaoResult<user::Model> {
        self.update(*id, move |active| {
            if let Some(email) = changes.email {
                active.email = Set(email);
            }
            if let Some(password_hash) = changes.password_hash {
                active.password_hash = Set(password_hash);
            }
            if let Some(first_name) = changes.first_name {
                active.first_name = Set(first_name);
            }
            if let Some(last_name) = changes.last_name {
                active.last_name = Set(last_name);
            }
        })
        .await
    }

    pub async fn set_last_login(
        &self,
        id: &Uuid,
        at: &chrono::DateTime<chrono::FixedOffset>,
    ) -> DaoResult<()> {
        let at = *at;
        self.update(*id, move |active| {
            active.last_login_at = Set(Some(at));
        })
        .await
        .map(|_| ())
    }
}
