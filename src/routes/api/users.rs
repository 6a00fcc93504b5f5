use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    middleware::AuthUser,
    payloads::{
        activation::ActivationRequest,
        user::{UserCreateRequest, UserRead},
    },
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", post(register))
        .route("/users/activate", post(activate))
        .route("/users/{id}", get(get_user))
        .with_state(state)
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UserCreateRequest>,
) -> ApiResult<UserRead> {
    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .register(body)
        .await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", user.into())
}

async fn activate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ActivationRequest>,
) -> ApiResult<UserRead> {
    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .activate(body)
        .await?;
    JsonApiResponse::with_status(StatusCode::OK, "activated", user.into())
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    _caller: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<UserRead> {
    let user = ServiceContext::from_state(state.as_ref())
        .user()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User not found (id={id})")))?;
    JsonApiResponse::ok(user.into())
}
