use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::{error::AppError, services::ServiceContext, state::AppState};

/// The caller behind a `Bearer` access token.
///
/// Resolved once per request and cached in the request extensions, so
/// handlers that take it more than once do not decode the token twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if let Some(caller) = parts.extensions.get::<AuthUser>() {
            return Ok(*caller);
        }

        let token = bearer_token(parts)
            .ok_or_else(|| AppError::unauthorized("Missing/invalid Authorization header"))?;
        let claims = ServiceContext::from_state(state.as_ref()).auth().verify(token)?;
        let caller = AuthUser { id: claims.sub };
        parts.extensions.insert(caller);
        Ok(caller)
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
