use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidateEmail};

use super::{DUPLICATE_EMAIL, INVALID_EMAIL, PASSWORD_MISMATCH, field_rules, finish};
use crate::{
    auth::password::validate_password,
    db::{dao::UserDao, entities::user},
    error::AppError,
};

/// Plain user projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRead {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&user::Model> for UserRead {
    fn from(model: &user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email.clone(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
        }
    }
}

impl From<user::Model> for UserRead {
    fn from(model: user::Model) -> Self {
        Self::from(&model)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserCreateRequest {
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub password: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub password2: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub last_name: Option<String>,
}

/// A registration that passed validation. The confirmation is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserCreateRequest {
    pub async fn validate_with(&self, users: &UserDao) -> Result<NewAccount, AppError> {
        // Surrounding whitespace is not part of the address.
        let trimmed = Self {
            email: self.email.as_deref().map(|email| email.trim().to_string()),
            ..self.clone()
        };
        let mut errors = field_rules(&trimmed);

        let email = trimmed.email.as_deref().map(normalize_email);
        if let (false, Some(email)) = (errors.has("email"), email.as_deref()) {
            if users.find_by_email(email).await?.is_some() {
                errors.add("email", DUPLICATE_EMAIL);
            }
        }

        if let (false, Some(password)) = (errors.has("password"), self.password.as_deref()) {
            errors.extend("password", validate_password(password));
        }

        finish(errors)?;

        if self.password != self.password2 {
            return Err(AppError::validation("password", PASSWORD_MISMATCH));
        }

        Ok(NewAccount {
            email: email.unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserUpdateRequest {
    pub email: Option<String>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: Option<String>,
    pub password2: Option<String>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub last_name: Option<String>,
}

/// Validated partial update; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserUpdateRequest {
    pub async fn validate_with(
        &self,
        current: &user::Model,
        users: &UserDao,
    ) -> Result<ProfileUpdate, AppError> {
        let mut errors = field_rules(self);

        // A blank e-mail means "not supplied".
        let email = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty());
        let email = match email {
            Some(email) if !email.validate_email() => {
                errors.add("email", INVALID_EMAIL);
                None
            }
            Some(email) => {
                let email = normalize_email(email);
                if let Some(owner) = users.find_by_email(&email).await? {
                    if owner.id != current.id {
                        errors.add("email", DUPLICATE_EMAIL);
                    }
                }
                Some(email)
            }
            None => None,
        };

        if let (false, Some(password)) = (errors.has("password"), self.password.as_deref()) {
            errors.extend("password", validate_password(password));
        }

        finish(errors)?;

        if let (Some(password), Some(password2)) = (&self.password, &self.password2) {
            if password != password2 {
                return Err(AppError::validation("password", PASSWORD_MISMATCH));
            }
        }

        Ok(ProfileUpdate {
            email,
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        })
    }
}

/// Lower-cases the domain part; the local part is kept as typed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use uuid::Uuid;

    use super::{UserCreateRequest, UserUpdateRequest, normalize_email};
    use crate::{
        db::{
            dao::{DaoBase, UserDao},
            entities::user,
        },
        error::AppError,
        payloads::FieldErrors,
        test_helpers::user_model,
    };

    const STRONG: &str = "v3ry-Unusual-phrase";

    fn create_request() -> UserCreateRequest {
        UserCreateRequest {
            email: Some("Alice@Example.COM".to_string()),
            password: Some(STRONG.to_string()),
            password2: Some(STRONG.to_string()),
            first_name: Some("Alice".to_string()),
            last_name: Some("Liddell".to_string()),
        }
    }

    fn no_users() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection()
    }

    fn field_errors(err: AppError) -> FieldErrors {
        match err {
            AppError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn normalize_email_lowercases_domain_only() {
        assert_eq!(normalize_email(" Alice@Example.COM "), "Alice@example.com");
        assert_eq!(normalize_email("no-at-sign"), "no-at-sign");
    }

    #[tokio::test]
    async fn create_drops_confirmation_and_normalizes_email() {
        let db = no_users();
        let account = create_request()
            .validate_with(&UserDao::new(&db))
            .await
            .expect("validation should pass");

        assert_eq!(account.email, "Alice@example.com");
        assert_eq!(account.password, STRONG);
        assert_eq!(account.first_name, "Alice");
    }

    #[tokio::test]
    async fn create_reports_every_missing_field() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let errors = field_errors(
            UserCreateRequest::default()
                .validate_with(&UserDao::new(&db))
                .await
                .expect_err("validation should fail"),
        );

        for field in ["email", "password", "password2", "first_name", "last_name"] {
            assert_eq!(
                errors.get(field),
                Some(&["This field is required.".to_string()][..]),
                "field {field}"
            );
        }
    }

    #[tokio::test]
    async fn create_rejects_mismatched_confirmation_on_password() {
        let db = no_users();
        let mut request = create_request();
        request.password2 = Some("another-Unusual-phrase".to_string());

        let errors = field_errors(
            request
                .validate_with(&UserDao::new(&db))
                .await
                .expect_err("validation should fail"),
        );
        assert_eq!(
            errors.get("password"),
            Some(&["Password fields didn't match.".to_string()][..])
        );
        assert!(!errors.has("password2"));
    }

    #[tokio::test]
    async fn create_rejects_taken_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(Uuid::new_v4(), "Alice@example.com")]])
            .into_connection();

        let errors = field_errors(
            create_request()
                .validate_with(&UserDao::new(&db))
                .await
                .expect_err("validation should fail"),
        );
        assert_eq!(
            errors.get("email"),
            Some(&["user with this email already exists.".to_string()][..])
        );
    }

    #[tokio::test]
    async fn create_trims_padded_email_before_checking_format() {
        let db = no_users();
        let mut request = create_request();
        request.email = Some(" bob@example.com ".to_string());

        let account = request
            .validate_with(&UserDao::new(&db))
            .await
            .expect("padded email should pass");
        assert_eq!(account.email, "bob@example.com");
    }

    #[tokio::test]
    async fn create_accepts_password_containing_last_name() {
        let db = no_users();
        let mut request = create_request();
        request.password = Some("Liddell-unique-42".to_string());
        request.password2 = Some("Liddell-unique-42".to_string());

        let account = request
            .validate_with(&UserDao::new(&db))
            .await
            .expect("password resembling a name should pass");
        assert_eq!(account.password, "Liddell-unique-42");
    }

    #[tokio::test]
    async fn create_runs_password_rules_before_equality() {
        let db = no_users();
        let mut request = create_request();
        request.password = Some("12345".to_string());

        let errors = field_errors(
            request
                .validate_with(&UserDao::new(&db))
                .await
                .expect_err("validation should fail"),
        );
        let messages = errors.get("password").expect("password errors");
        assert!(messages.contains(&"This password is entirely numeric.".to_string()));
        assert!(!messages.contains(&"Password fields didn't match.".to_string()));
    }

    #[tokio::test]
    async fn update_skips_equality_without_confirmation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let current = user_model(Uuid::new_v4(), "alice@example.com");
        let request = UserUpdateRequest {
            password: Some(STRONG.to_string()),
            ..Default::default()
        };

        let update = request
            .validate_with(&current, &UserDao::new(&db))
            .await
            .expect("validation should pass");
        assert_eq!(update.password.as_deref(), Some(STRONG));
        assert!(update.email.is_none());
        assert!(update.first_name.is_none());
    }

    #[tokio::test]
    async fn update_checks_equality_when_both_present() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let current = user_model(Uuid::new_v4(), "alice@example.com");
        let request = UserUpdateRequest {
            password: Some(STRONG.to_string()),
            password2: Some("different-Unusual-phrase".to_string()),
            ..Default::default()
        };

        let errors = field_errors(
            request
                .validate_with(&current, &UserDao::new(&db))
                .await
                .expect_err("validation should fail"),
        );
        assert!(errors.has("password"));
    }

    #[tokio::test]
    async fn update_ignores_blank_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let current = user_model(Uuid::new_v4(), "alice@example.com");
        let request = UserUpdateRequest {
            email: Some("   ".to_string()),
            first_name: Some("Alicia".to_string()),
            ..Default::default()
        };

        let update = request
            .validate_with(&current, &UserDao::new(&db))
            .await
            .expect("validation should pass");
        assert!(update.email.is_none());
        assert_eq!(update.first_name.as_deref(), Some("Alicia"));
    }

    #[tokio::test]
    async fn update_rejects_email_owned_by_someone_else() {
        let current = user_model(Uuid::new_v4(), "alice@example.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[user_model(Uuid::new_v4(), "bob@example.com")]])
            .into_connection();
        let request = UserUpdateRequest {
            email: Some("bob@example.com".to_string()),
            ..Default::default()
        };

        let errors = field_errors(
            request
                .validate_with(&current, &UserDao::new(&db))
                .await
                .expect_err("validation should fail"),
        );
        assert_eq!(
            errors.get("email"),
            Some(&["user with this email already exists.".to_string()][..])
        );
    }

    #[tokio::test]
    async fn update_accepts_own_email() {
        let current = user_model(Uuid::new_v4(), "alice@example.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[current.clone()]])
            .into_connection();
        let request = UserUpdateRequest {
            email: Some("alice@EXAMPLE.com".to_string()),
            ..Default::default()
        };

        let update = request
            .validate_with(&current, &UserDao::new(&db))
            .await
            .expect("validation should pass");
        assert_eq!(update.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn update_rejects_malformed_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let current = user_model(Uuid::new_v4(), "alice@example.com");
        let request = UserUpdateRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };

        let errors = field_errors(
            request
                .validate_with(&current, &UserDao::new(&db))
                .await
                .expect_err("validation should fail"),
        );
        assert_eq!(
            errors.get("email"),
            Some(&["Enter a valid email address.".to_string()][..])
        );
    }
}
