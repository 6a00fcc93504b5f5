use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::{INVALID_ACTIVATION, INVALID_UUID, field_rules, finish};
use crate::{
    db::{dao::UserDao, entities::user},
    error::AppError,
};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ActivationRequest {
    #[validate(required(message = "This field is required."))]
    pub activation_token: Option<String>,
}

impl ActivationRequest {
    /// Resolves the token to the inactive user carrying it.
    pub async fn validate_with(&self, users: &UserDao) -> Result<user::Model, AppError> {
        finish(field_rules(self))?;

        let raw = self.activation_token.as_deref().unwrap_or_default();
        let token = Uuid::parse_str(raw.trim())
            .map_err(|_| AppError::validation("activation_token", INVALID_UUID))?;

        users
            .find_inactive_by_activation_token(&token)
            .await?
            .ok_or_else(|| AppError::validation("activation_token", INVALID_ACTIVATION))
    }
}
