use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use crate::{
    payloads::credentials::{LoginRequest, RefreshRequest, TokenRead},
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .with_state(state)
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<TokenRead> {
    let (email, password) = body.credentials()?;
    let tokens = ServiceContext::from_state(state.as_ref())
        .auth()
        .login(&email, &password)
        .await?;
    JsonApiResponse::ok(tokens.into())
}

async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RefreshRequest>,
) -> ApiResult<TokenRead> {
    let token = body.token()?;
    let tokens = ServiceContext::from_state(state.as_ref())
        .auth()
        .refresh(&token)
        .await?;
    JsonApiResponse::ok(tokens.into())
}
