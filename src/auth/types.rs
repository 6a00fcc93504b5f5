use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt::now_unix;

/// Access-token payload. Times are unix seconds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn for_user(user_id: Uuid, ttl_secs: usize) -> Self {
        let iat = now_unix();
        Self {
            sub: user_id,
            iat,
            exp: iat.saturating_add(ttl_secs),
        }
    }
}

/// What a successful sign-in or refresh hands back.
#[derive(Debug)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    pub expires_in: usize,
}
