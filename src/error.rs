use crate::{db::dao::DaoLayerError, payloads::FieldErrors};

const VALIDATION_FAILED: &str = "Validation failed";

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation(FieldErrors),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(FieldErrors::single(field, message))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(_) => VALIDATION_FAILED,
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.into())
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        if err.is_unique_violation() {
            return AppError::conflict("Resource already exists");
        }
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::InvalidPagination { .. } => AppError::bad_request(err.to_string()),
            DaoLayerError::Db(source) => {
                tracing::error!(error = %source, "database operation failed");
                AppError::internal("Internal server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use uuid::Uuid;

    use super::AppError;
    use crate::db::dao::DaoLayerError;

    #[test]
    fn not_found_keeps_entity_label() {
        let id = Uuid::new_v4();
        let err = AppError::from(DaoLayerError::NotFound { entity: "User", id });
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.message(), format!("User not found (id={id})"));
    }

    #[test]
    fn database_failures_hide_details() {
        let err = AppError::from(DaoLayerError::Db(DbErr::Custom("connection reset".into())));
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn validation_has_fixed_message() {
        let err = AppError::validation("email", "Enter a valid email address.");
        assert_eq!(err.message(), "Validation failed");
    }
}
