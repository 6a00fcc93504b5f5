use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{field_rules, finish};
use crate::{auth::TokenBundle, error::AppError};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns `(email, password)` once both are present.
    pub fn credentials(self) -> Result<(String, String), AppError> {
        finish(field_rules(&self))?;
        Ok((
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub refresh_token: Option<String>,
}

impl RefreshRequest {
    pub fn token(self) -> Result<String, AppError> {
        finish(field_rules(&self))?;
        Ok(self.refresh_token.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRead {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: usize,
}

impl From<TokenBundle> for TokenRead {
    fn from(bundle: TokenBundle) -> Self {
        Self {
            access_token: bundle.access_token,
            refresh_token: bundle.refresh_token,
            token_type: bundle.token_type.to_string(),
            expires_in: bundle.expires_in,
        }
    }
}
