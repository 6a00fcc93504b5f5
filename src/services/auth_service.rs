use chrono::{Duration, Utc};

use crate::{
    auth::{
        Claims, TokenBundle,
        jwt::JwtKeys,
        password::verify_password,
    },
    config::AuthConfig,
    db::{dao::RefreshTokenDao, entities::user},
    error::AppError,
    services::user_service::UserService,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const INVALID_REFRESH: &str = "Invalid refresh token";
const EXPIRED_REFRESH: &str = "Refresh token expired";

/// Sign-in and token rotation for activated accounts.
#[derive(Clone)]
pub struct AuthService {
    user_service: UserService,
    refresh_token_dao: RefreshTokenDao,
    jwt: JwtKeys,
    access_ttl_secs: usize,
    refresh_ttl: Duration,
}

impl AuthService {
    pub fn new(
        user_service: UserService,
        refresh_token_dao: RefreshTokenDao,
        jwt: JwtKeys,
        cfg: &AuthConfig,
    ) -> Self {
        Self {
            user_service,
            refresh_token_dao,
            jwt,
            access_ttl_secs: usize::try_from(cfg.access_ttl_secs).unwrap_or_default(),
            refresh_ttl: Duration::days(cfg.refresh_ttl_days),
        }
    }

    async fn issue_tokens(&self, user: &user::Model) -> Result<TokenBundle, AppError> {
        let access_token = self
            .jwt
            .encode(&Claims::for_user(user.id, self.access_ttl_secs))?;
        let refresh = self
            .refresh_token_dao
            .issue(&user.id, self.refresh_ttl)
            .await?;

        Ok(TokenBundle {
            access_token,
            refresh_token: refresh.token,
            token_type: "Bearer",
            expires_in: self.access_ttl_secs,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenBundle, AppError> {
        let user = self
            .user_service
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
        if !user.is_active {
            return Err(AppError::unauthorized("Account is not activated"));
        }

        self.user_service
            .set_last_login(&user.id, &Utc::now().fixed_offset())
            .await?;
        tracing::info!(user_id = %user.id, "user signed in");

        self.issue_tokens(&user).await
    }

    /// Trades a live refresh token for a new pair. Each token works once.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenBundle, AppError> {
        let token = self
            .refresh_token_dao
            .find_by_token(refresh_token)
            .await?
            .filter(|token| !token.revoked)
            .ok_or_else(|| AppError::unauthorized(INVALID_REFRESH))?;

        if token.expires_at <= Utc::now().fixed_offset() {
            return Err(AppError::unauthorized(EXPIRED_REFRESH));
        }

        let user = self
            .user_service
            .find_by_id(&token.user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| AppError::unauthorized(INVALID_REFRESH))?;

        if !self.refresh_token_dao.consume(&token.id).await? {
            tracing::warn!(user_id = %user.id, "refresh token reused concurrently");
            return Err(AppError::unauthorized(INVALID_REFRESH));
        }

        self.issue_tokens(&user).await
    }

    pub fn verify(&self, access_token: &str) -> Result<Claims, AppError> {
        self.jwt.decode(access_token)
    }
}
